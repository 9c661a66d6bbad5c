//! Typed key-value access and subtree operations.
//!
//! Reads return the caller-supplied default when the key, its container,
//! or the backend itself is unavailable; the public contract does not
//! distinguish the three. Writes that cannot reach the backend are
//! silently dropped.

use tracing::{debug, trace, warn};

use super::keypath::{container_path, split_key};
use super::Preferences;
use crate::backend::Value;

impl Preferences {
    /// Write a string value.
    pub fn write_string(&mut self, key: &str, value: &str) {
        debug!(key = %key, value = %value, "Writing string");
        let (container, name) = split_key(key);
        let _ = self
            .backend_mut()
            .write_value(&container, &name, Value::Str(value.to_string()));
    }

    /// Write an integer value.
    pub fn write_int(&mut self, key: &str, value: i64) {
        debug!(key = %key, value = %value, "Writing int");
        let (container, name) = split_key(key);
        let _ = self
            .backend_mut()
            .write_value(&container, &name, Value::Int(value));
    }

    /// Write a floating-point value as decimal text.
    ///
    /// The shortest round-trip representation is stored, so reading it
    /// back through [`read_double`](Self::read_double) reproduces the
    /// exact value.
    pub fn write_double(&mut self, key: &str, value: f64) {
        debug!(key = %key, value = %value, "Writing double");
        let (container, name) = split_key(key);
        let _ = self
            .backend_mut()
            .write_value(&container, &name, Value::Str(value.to_string()));
    }

    /// Write a list of strings as one comma-joined value.
    pub fn write_string_list(&mut self, key: &str, items: &[String]) {
        self.write_string(key, &items.join(","));
    }

    /// Read a string value, or the default when absent or unreadable.
    #[must_use]
    pub fn read_string(&self, key: &str, default: &str) -> String {
        let (container, name) = split_key(key);

        match self.backend().read_value(&container, &name) {
            Ok(Some(Value::Str(value))) => value,
            _ => default.to_string(),
        }
    }

    /// Read an integer value, or the default when absent or unreadable.
    #[must_use]
    pub fn read_int(&self, key: &str, default: i64) -> i64 {
        let (container, name) = split_key(key);

        match self.backend().read_value(&container, &name) {
            Ok(Some(Value::Int(value))) => value,
            _ => default,
        }
    }

    /// Read a decimal-text value, or the default when absent or unparsable.
    #[must_use]
    pub fn read_double(&self, key: &str, default: f64) -> f64 {
        let text = self.read_string(key, "");

        text.trim().parse().unwrap_or(default)
    }

    /// Read a boolean: any non-zero stored integer is true.
    #[must_use]
    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        self.read_int(key, i64::from(default)) != 0
    }

    /// Read a comma-joined string list. Absent keys yield an empty list.
    #[must_use]
    pub fn read_string_list(&self, key: &str) -> Vec<String> {
        let joined = self.read_string(key, "");

        if joined.is_empty() {
            return Vec::new();
        }

        joined.split(',').map(|s| s.trim().to_string()).collect()
    }

    /// Delete a value, or a whole container when the key ends in a
    /// separator or has an empty leaf.
    pub fn delete_key(&mut self, key: &str) {
        debug!(key = %key, "Deleting key");
        let (container, name) = split_key(key);

        if name.is_empty() {
            let _ = self.backend_mut().delete_tree(&container);
        } else {
            let _ = self.backend_mut().delete_value(&container, &name);
        }
    }

    /// Recursively copy every value and nested container from one
    /// container key to another, creating the destination if absent.
    ///
    /// Returns false as soon as any backend call fails; the destination
    /// may then be partially written.
    pub fn copy_subtree(&mut self, from: &str, to: &str) -> bool {
        let from_abs = container_path(from);
        let to_abs = container_path(to);

        if !self.backend().container_exists(&from_abs) {
            return false;
        }

        self.copy_tree(&from_abs, &to_abs)
    }

    fn copy_tree(&mut self, from: &str, to: &str) -> bool {
        trace!(from = %from, to = %to, "Copying tree");

        if self.backend_mut().create_container(to).is_err() {
            return false;
        }

        let Ok(names) = self.backend().list_values(from) else {
            return false;
        };

        for name in names {
            let value = match self.backend().read_value(from, &name) {
                Ok(Some(value)) => value,
                _ => return false,
            };

            if self.backend_mut().write_value(to, &name, value).is_err() {
                return false;
            }
        }

        let Ok(children) = self.backend().list_containers(from) else {
            return false;
        };

        children.into_iter().all(|child| {
            self.copy_tree(&format!("{from}/{child}"), &format!("{to}/{child}"))
        })
    }

    /// Move a subtree: copy, then delete the source.
    ///
    /// The source is only deleted after a fully successful copy; a failed
    /// copy leaves the source untouched and the destination partially
    /// written.
    pub fn move_key(&mut self, from: &str, to: &str) {
        debug!(from = %from, to = %to, "Moving key");

        if !self.backend().container_exists(&container_path(from)) {
            return;
        }

        if self.copy_subtree(from, to) {
            self.delete_key(&format!("{from}/"));
        } else {
            warn!(from = %from, to = %to, "Copy failed, source left in place");
        }
    }
}
