//! Device identifiers derived from device paths.
//!
//! Registered devices are addressed by an opaque path string, but the host
//! driver-registration machinery also consumes a CLSID derived from that
//! path. Both identifier spaces must stay collision-free, so the allocator
//! checks candidates against each independently.

use std::fmt;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// GUID-form class identifier derived from a device path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clsid(Uuid);

impl Clsid {
    /// Wrap raw identifier bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Raw identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Clsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

/// Derive the class identifier for a device path.
///
/// The derivation must be deterministic: enumeration resolves a CLSID back
/// to a camera by re-deriving each registered path and comparing. SHA-256
/// truncated to 16 bytes stands in for the platform transform.
#[must_use]
pub fn clsid_from_path(path: &str) -> Clsid {
    let digest = Sha256::digest(path.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);

    Clsid::from_bytes(bytes)
}
