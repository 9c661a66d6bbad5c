//! Video format records as stored in the registry.
//!
//! A camera's format list is persisted as one subtree per format, holding
//! four leaf values: the four-character pixel layout code, width, height,
//! and the frame rate as rational text (e.g. `"30000/1001"`). Frame rates
//! stay in text form end to end so they round-trip without precision loss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Rational frame rate, kept exactly as parsed.
///
/// Numerator and denominator are not reduced, so the textual form written
/// to the backend reparses to the identical pair. Equality is rational
/// (cross-multiplied), so `30/1` and `60/2` compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Create a fraction from numerator and denominator.
    #[must_use]
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Numerator.
    #[must_use]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// Denominator.
    #[must_use]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// Approximate floating-point value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// A rate is usable when both terms are positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.num > 0 && self.den > 0
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self { num: 0, den: 1 }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        i128::from(self.num) * i128::from(other.den)
            == i128::from(other.num) * i128::from(self.den)
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for Fraction {
    type Err = RegistryError;

    /// Parse `"num/den"` or a bare `"num"` (denominator 1).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RegistryError::InvalidFraction {
            text: s.to_string(),
        };

        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(invalid());
        }

        match trimmed.split_once('/') {
            None => {
                let num = trimmed.parse().map_err(|_| invalid())?;
                Ok(Self { num, den: 1 })
            }
            Some((num, den)) => {
                let num = num.trim().parse().map_err(|_| invalid())?;
                let den = den.trim().parse().map_err(|_| invalid())?;
                Ok(Self { num, den })
            }
        }
    }
}

/// One entry in a camera's ordered format list.
///
/// The first format in a camera's list is its default/native format, so
/// list order is significant and preserved by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    /// Four-character pixel layout code (e.g. `"YUY2"`, `"RGB24"`).
    pub fourcc: String,
    /// Frame width in pixels.
    pub width: i32,
    /// Frame height in pixels.
    pub height: i32,
    /// Frame rate.
    pub fps: Fraction,
}

impl VideoFormat {
    /// Create a format record.
    #[must_use]
    pub fn new(fourcc: impl Into<String>, width: i32, height: i32, fps: Fraction) -> Self {
        Self {
            fourcc: fourcc.into(),
            width,
            height,
            fps,
        }
    }

    /// A format read back from the store is valid when every field
    /// survived: non-empty code, positive dimensions, positive rate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.fourcc.is_empty() && self.width > 0 && self.height > 0 && self.fps.is_valid()
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} {}",
            self.fourcc, self.width, self.height, self.fps
        )
    }
}
