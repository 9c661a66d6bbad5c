//! Device path allocation.
//!
//! New devices need an external path that collides neither with any
//! registered camera path nor with the CLSID derived from any registered
//! path, since the host driver-registration mechanism consumes both
//! identifier spaces.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::Preferences;

/// Common prefix for generated device paths.
pub const DEVICE_PREFIX: &str = "VirtualCamera";

/// Probe bound for path generation. The registration mechanism is
/// fixed-format, so exhausting the bound means the registry is full;
/// the search is never widened.
pub const MAX_DEVICE_PATHS: usize = 64;

impl Preferences {
    /// Allocate a device path that is free in both identifier spaces.
    ///
    /// Probes `DEVICE_PREFIX + index` for `index in 0..MAX_DEVICE_PATHS`
    /// and returns the first candidate whose literal path and derived
    /// CLSID are both unused. Returns `None` when every candidate is
    /// taken; callers must treat that as "registry full".
    #[must_use]
    pub fn create_device_path(&self) -> Option<String> {
        // Device paths and CLSIDs currently in use.
        let paths: HashSet<String> = (0..self.cameras_count())
            .map(|i| self.camera_path(i))
            .collect();
        let clsids: HashSet<_> = paths.iter().map(|p| self.derive_clsid(p)).collect();

        for i in 0..MAX_DEVICE_PATHS {
            // Device paths carry no inherent structure; candidates are a
            // common prefix plus an incremental index.
            let path = format!("{DEVICE_PREFIX}{i}");
            let clsid = self.derive_clsid(&path);

            if !paths.contains(&path) && !clsids.contains(&clsid) {
                debug!(path = %path, clsid = %clsid, "Allocated device path");
                return Some(path);
            }
        }

        warn!(bound = MAX_DEVICE_PATHS, "Device path space exhausted");

        None
    }
}
