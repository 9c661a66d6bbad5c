//! Process-wide settings stored outside the camera registry.

use super::Preferences;

/// Log level stored when the user never set one: informational.
///
/// Levels follow the mapping in [`crate::logging`]: 0 = off, 1 = error,
/// 2 = warn, 3 = info, 4 = debug, 5+ = trace.
pub const DEFAULT_LOG_LEVEL: i64 = 3;

impl Preferences {
    /// Path of the placeholder picture shown when no frame source is
    /// attached. Empty when unset.
    #[must_use]
    pub fn picture(&self) -> String {
        self.read_string("picture", "")
    }

    /// Set the placeholder picture path.
    pub fn set_picture(&mut self, picture: &str) {
        self.write_string("picture", picture);
    }

    /// Configured log verbosity.
    #[must_use]
    pub fn log_level(&self) -> i64 {
        self.read_int("loglevel", DEFAULT_LOG_LEVEL)
    }

    /// Set the log verbosity.
    pub fn set_log_level(&mut self, level: i64) {
        self.write_int("loglevel", level);
    }
}
