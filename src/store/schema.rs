//! Camera, format, and control CRUD over the flat key namespace.
//!
//! The camera list is stored under `Cameras/` with an authoritative
//! `size` value and one numbered subtree per camera. Indices are 1-based
//! in storage and 0-based in this API; valid storage indices are exactly
//! `1..=size`, with no gaps. Removal closes any gap by moving every
//! higher-numbered camera subtree down one slot.

use tracing::{debug, info, trace};

use super::Preferences;
use crate::format::VideoFormat;
use crate::ident::Clsid;

fn camera_key(storage_index: usize, leaf: &str) -> String {
    format!("Cameras/{storage_index}/{leaf}")
}

fn format_key(storage_index: usize, format_index: usize, leaf: &str) -> String {
    format!("Cameras/{storage_index}/Formats/{format_index}/{leaf}")
}

impl Preferences {
    /// Number of registered cameras.
    #[must_use]
    pub fn cameras_count(&self) -> usize {
        let count = self.read_int("Cameras/size", 0);
        trace!(count = %count, "Cameras");

        usize::try_from(count).unwrap_or(0)
    }

    /// Register a camera with a freshly allocated device path.
    ///
    /// Returns the allocated path, or `None` when the path space is
    /// exhausted.
    pub fn add_camera(&mut self, description: &str, formats: &[VideoFormat]) -> Option<String> {
        self.add_camera_with_path("", description, formats)
    }

    /// Register a camera under the given device path, or allocate one if
    /// the path is empty.
    ///
    /// Returns `None` without mutating anything when the path is already
    /// registered or allocation fails.
    pub fn add_camera_with_path(
        &mut self,
        path: &str,
        description: &str,
        formats: &[VideoFormat],
    ) -> Option<String> {
        if !path.is_empty() && self.camera_exists(path) {
            return None;
        }

        let path = if path.is_empty() {
            self.create_device_path()?
        } else {
            path.to_string()
        };

        info!(path = %path, description = %description, "Adding camera");
        let storage_index = self.cameras_count() + 1;
        self.write_int("Cameras/size", storage_index as i64);
        self.write_string(&camera_key(storage_index, "description"), description);
        self.write_string(&camera_key(storage_index, "path"), &path);
        self.write_formats(storage_index, formats);

        Some(path)
    }

    /// Remove the camera registered at the given device path, along with
    /// its formats and controls. Unknown paths are a no-op.
    ///
    /// Every camera above the removed slot shifts down one index, keeping
    /// storage indices contiguous.
    pub fn remove_camera(&mut self, path: &str) {
        info!(path = %path, "Removing camera");

        let Some(index) = self.camera_from_path(path) else {
            return;
        };

        self.camera_set_formats(index, &[]);

        let count = self.cameras_count();
        self.delete_key(&format!("Cameras/{}/", index + 1));

        for i in (index + 1)..count {
            self.move_key(&format!("Cameras/{}", i + 1), &format!("Cameras/{i}"));
        }

        if count > 1 {
            self.write_int("Cameras/size", (count - 1) as i64);
        } else {
            self.delete_key("Cameras/");
        }
    }

    /// Drop the whole camera registry.
    pub fn remove_all_cameras(&mut self) {
        info!("Removing all cameras");
        self.delete_key("Cameras/");
    }

    /// Whether a camera is registered at the given device path.
    #[must_use]
    pub fn camera_exists(&self, path: &str) -> bool {
        self.camera_from_path(path).is_some()
    }

    /// Index of the camera registered at the given device path.
    #[must_use]
    pub fn camera_from_path(&self, path: &str) -> Option<usize> {
        (0..self.cameras_count()).find(|&i| self.camera_path(i) == path)
    }

    /// Index of the camera whose device path derives to the given CLSID.
    #[must_use]
    pub fn camera_from_clsid(&self, clsid: &Clsid) -> Option<usize> {
        (0..self.cameras_count()).find(|&i| self.derive_clsid(&self.camera_path(i)) == *clsid)
    }

    /// Device path of the camera at the given index, or empty when the
    /// index is out of range.
    #[must_use]
    pub fn camera_path(&self, index: usize) -> String {
        self.read_string(&camera_key(index + 1, "path"), "")
    }

    /// Description of the camera at the given index, or empty when the
    /// index is out of range.
    #[must_use]
    pub fn camera_description(&self, index: usize) -> String {
        if index >= self.cameras_count() {
            return String::new();
        }

        self.read_string(&camera_key(index + 1, "description"), "")
    }

    /// Update the description of the camera at the given index.
    pub fn camera_set_description(&mut self, index: usize, description: &str) {
        if index >= self.cameras_count() {
            return;
        }

        self.write_string(&camera_key(index + 1, "description"), description);
    }

    /// Number of formats stored for the camera at the given index.
    #[must_use]
    pub fn formats_count(&self, index: usize) -> usize {
        let count = self.read_int(&camera_key(index + 1, "Formats/size"), 0);

        usize::try_from(count).unwrap_or(0)
    }

    /// One stored format. An out-of-range camera or format index yields
    /// an invalid (default) record.
    #[must_use]
    pub fn camera_format(&self, index: usize, format_index: usize) -> VideoFormat {
        let fourcc = self.read_string(&format_key(index + 1, format_index + 1, "format"), "");
        let width = self.read_int(&format_key(index + 1, format_index + 1, "width"), 0);
        let height = self.read_int(&format_key(index + 1, format_index + 1, "height"), 0);
        let fps = self
            .read_string(&format_key(index + 1, format_index + 1, "fps"), "")
            .parse()
            .unwrap_or_default();

        VideoFormat {
            fourcc,
            width: i32::try_from(width).unwrap_or(0),
            height: i32::try_from(height).unwrap_or(0),
            fps,
        }
    }

    /// The camera's ordered format list. Entries that fail to read back
    /// as valid formats are skipped.
    #[must_use]
    pub fn camera_formats(&self, index: usize) -> Vec<VideoFormat> {
        (0..self.formats_count(index))
            .map(|i| self.camera_format(index, i))
            .filter(VideoFormat::is_valid)
            .collect()
    }

    /// Replace the camera's format list. Out-of-range camera indices are
    /// a no-op.
    pub fn camera_set_formats(&mut self, index: usize, formats: &[VideoFormat]) {
        if index >= self.cameras_count() {
            return;
        }

        debug!(index = %index, count = formats.len(), "Setting formats");
        self.delete_key(&camera_key(index + 1, "Formats/"));
        self.write_formats(index + 1, formats);
    }

    /// Insert a format at the given position, or append when the position
    /// is `None` or past the end of the list.
    pub fn camera_add_format(
        &mut self,
        index: usize,
        format: VideoFormat,
        position: Option<usize>,
    ) {
        if index >= self.cameras_count() {
            return;
        }

        let mut formats = self.camera_formats(index);
        let position = position.unwrap_or(formats.len()).min(formats.len());
        formats.insert(position, format);

        self.camera_set_formats(index, &formats);
    }

    /// Remove the format at the given position. Out-of-range positions
    /// are a no-op.
    pub fn camera_remove_format(&mut self, index: usize, position: usize) {
        if index >= self.cameras_count() {
            return;
        }

        let mut formats = self.camera_formats(index);

        if position >= formats.len() {
            return;
        }

        formats.remove(position);
        self.camera_set_formats(index, &formats);
    }

    /// Stored value of a named camera control, default 0.
    #[must_use]
    pub fn camera_control_value(&self, index: usize, control: &str) -> i64 {
        self.read_int(&camera_key(index + 1, &format!("Controls/{control}")), 0)
    }

    /// Set a named camera control value.
    pub fn camera_set_control_value(&mut self, index: usize, control: &str, value: i64) {
        self.write_int(
            &camera_key(index + 1, &format!("Controls/{control}")),
            value,
        );
    }

    fn write_formats(&mut self, storage_index: usize, formats: &[VideoFormat]) {
        self.write_int(
            &camera_key(storage_index, "Formats/size"),
            formats.len() as i64,
        );

        for (i, format) in formats.iter().enumerate() {
            self.write_string(&format_key(storage_index, i + 1, "format"), &format.fourcc);
            self.write_int(
                &format_key(storage_index, i + 1, "width"),
                i64::from(format.width),
            );
            self.write_int(
                &format_key(storage_index, i + 1, "height"),
                i64::from(format.height),
            );
            self.write_string(
                &format_key(storage_index, i + 1, "fps"),
                &format.fps.to_string(),
            );
        }
    }
}
