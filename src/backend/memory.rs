//! In-memory backend for unit testing and ephemeral registries.
//!
//! This backend records everything in a process-local tree and supports
//! failure injection, so the store's degrade-to-default read contract and
//! silent-drop write contract can be exercised without a real host store.
//!
//! # Example
//!
//! ```rust,ignore
//! use vcamreg::backend::{Backend, MemoryBackend, Value};
//!
//! let mut backend = MemoryBackend::new();
//! backend.write_value("Cameras/1", "path", Value::Str("VirtualCamera0".into())).unwrap();
//!
//! backend.set_fail_reads(true);
//! assert!(backend.read_value("Cameras/1", "path").is_err());
//! ```

use tracing::trace;

use super::tree::Tree;
use super::{Backend, Value};
use crate::error::{RegistryError, Result};

/// Configuration for failure injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryConfig {
    /// Every read fails as backend-unavailable.
    pub fail_reads: bool,
    /// Every write fails as backend-unavailable.
    pub fail_writes: bool,
    /// Fail all mutations after N successful ones (for testing partial
    /// compound operations).
    pub fail_after_ops: Option<usize>,
}

/// In-memory hierarchical store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tree: Tree,
    config: MemoryConfig,
    op_count: usize,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with failure injection configured.
    #[must_use]
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            tree: Tree::default(),
            config,
            op_count: 0,
        }
    }

    /// Toggle read failure injection.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.config.fail_reads = fail;
    }

    /// Toggle write failure injection.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.config.fail_writes = fail;
    }

    /// Number of successful mutations so far.
    #[must_use]
    pub const fn op_count(&self) -> usize {
        self.op_count
    }

    fn check_read(&self, container: &str) -> Result<()> {
        if self.config.fail_reads {
            return Err(RegistryError::BackendUnavailable {
                container: container.to_string(),
            });
        }

        Ok(())
    }

    fn check_write(&mut self, container: &str) -> Result<()> {
        let exhausted = self
            .config
            .fail_after_ops
            .is_some_and(|limit| self.op_count >= limit);

        if self.config.fail_writes || exhausted {
            return Err(RegistryError::BackendUnavailable {
                container: container.to_string(),
            });
        }

        self.op_count += 1;

        Ok(())
    }
}

impl Backend for MemoryBackend {
    fn container_exists(&self, container: &str) -> bool {
        !self.config.fail_reads && self.tree.node(container).is_some()
    }

    fn create_container(&mut self, container: &str) -> Result<()> {
        self.check_write(container)?;
        self.tree.node_mut_or_create(container);

        Ok(())
    }

    fn read_value(&self, container: &str, name: &str) -> Result<Option<Value>> {
        self.check_read(container)?;

        Ok(self
            .tree
            .node(container)
            .and_then(|node| node.get(name))
            .cloned())
    }

    fn write_value(&mut self, container: &str, name: &str, value: Value) -> Result<()> {
        self.check_write(container)?;
        trace!(container = %container, name = %name, "Writing value");
        self.tree.node_mut_or_create(container).set(name, value);

        Ok(())
    }

    fn delete_value(&mut self, container: &str, name: &str) -> Result<()> {
        self.check_write(container)?;

        if let Some(node) = self.tree.node_mut(container) {
            node.remove(name);
        }

        Ok(())
    }

    fn delete_tree(&mut self, container: &str) -> Result<()> {
        self.check_write(container)?;
        trace!(container = %container, "Deleting tree");
        self.tree.remove_tree(container);

        Ok(())
    }

    fn list_values(&self, container: &str) -> Result<Vec<String>> {
        self.check_read(container)?;

        Ok(self
            .tree
            .node(container)
            .map(Tree::value_names)
            .unwrap_or_default())
    }

    fn list_containers(&self, container: &str) -> Result<Vec<String>> {
        self.check_read(container)?;

        Ok(self
            .tree
            .node(container)
            .map(Tree::child_names)
            .unwrap_or_default())
    }
}
