//! JSON-file-persisted backend.
//!
//! Loads the whole container tree at open and writes it back after every
//! mutation. The on-disk representation is an implementation detail of
//! this backend; the store treats it as opaque.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::tree::Tree;
use super::{Backend, Value};
use crate::error::{RegistryError, Result, ResultExt};

/// File-backed hierarchical store.
pub struct FileBackend {
    path: PathBuf,
    tree: Tree,
}

impl FileBackend {
    /// Open or create a store file at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let tree = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|e| RegistryError::StoreOpenFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

            serde_json::from_str(&data).map_err(|e| RegistryError::StoreOpenFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            debug!(path = %path.display(), "Creating new store file");
            Tree::default()
        };

        Ok(Self { path, tree })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.tree)
            .with_context(|| format!("Failed to serialize store {}", self.path.display()))?;

        fs::write(&self.path, data).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to persist store");
            RegistryError::Io(e)
        })
    }
}

impl Backend for FileBackend {
    fn container_exists(&self, container: &str) -> bool {
        self.tree.node(container).is_some()
    }

    fn create_container(&mut self, container: &str) -> Result<()> {
        self.tree.node_mut_or_create(container);
        self.save()
    }

    fn read_value(&self, container: &str, name: &str) -> Result<Option<Value>> {
        Ok(self
            .tree
            .node(container)
            .and_then(|node| node.get(name))
            .cloned())
    }

    fn write_value(&mut self, container: &str, name: &str, value: Value) -> Result<()> {
        self.tree.node_mut_or_create(container).set(name, value);
        self.save()
    }

    fn delete_value(&mut self, container: &str, name: &str) -> Result<()> {
        if let Some(node) = self.tree.node_mut(container) {
            node.remove(name);
            self.save()?;
        }

        Ok(())
    }

    fn delete_tree(&mut self, container: &str) -> Result<()> {
        self.tree.remove_tree(container);
        self.save()
    }

    fn list_values(&self, container: &str) -> Result<Vec<String>> {
        Ok(self
            .tree
            .node(container)
            .map(Tree::value_names)
            .unwrap_or_default())
    }

    fn list_containers(&self, container: &str) -> Result<Vec<String>> {
        Ok(self
            .tree
            .node(container)
            .map(Tree::child_names)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_empty_store() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::open(temp.path().join("store.json")).unwrap();

        assert!(!backend.container_exists("Cameras"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        {
            let mut backend = FileBackend::open(&path).unwrap();
            backend
                .write_value("Cameras/1", "path", Value::Str("VirtualCamera0".into()))
                .unwrap();
            backend
                .write_value("Cameras", "size", Value::Int(1))
                .unwrap();
        }

        let backend = FileBackend::open(&path).unwrap();
        assert_eq!(
            backend.read_value("Cameras/1", "path").unwrap(),
            Some(Value::Str("VirtualCamera0".into()))
        );
        assert_eq!(
            backend.read_value("Cameras", "size").unwrap(),
            Some(Value::Int(1))
        );
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let result = FileBackend::open(&path);
        assert!(matches!(
            result,
            Err(RegistryError::StoreOpenFailed { .. })
        ));
    }

    #[test]
    fn test_delete_tree_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        {
            let mut backend = FileBackend::open(&path).unwrap();
            backend
                .write_value("Cameras/1", "path", Value::Str("p".into()))
                .unwrap();
            backend.delete_tree("Cameras").unwrap();
        }

        let backend = FileBackend::open(&path).unwrap();
        assert!(!backend.container_exists("Cameras"));
    }
}
