//! Hierarchical key-value backend abstraction.
//!
//! The store never talks to a concrete host store directly; it consumes the
//! [`Backend`] trait, so the same schema layer runs against an in-memory
//! tree in tests and a file-persisted tree in production.

mod file;
pub mod memory;
mod tree;

pub use file::FileBackend;
pub use memory::{MemoryBackend, MemoryConfig};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Typed leaf datum stored inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
}

impl Value {
    /// Borrow the text payload, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// The integer payload, if this is an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Str(_) => None,
            Self::Int(i) => Some(*i),
        }
    }
}

/// Hierarchical key-value store capability.
///
/// Container paths are slash-delimited and rooted at the backend's own
/// namespace; the store prepends its fixed root before calling in here.
///
/// # Implementation Notes
///
/// - Container and value name comparison is case-insensitive.
/// - Containers are created implicitly by the first write beneath them and
///   only disappear through [`delete_tree`](Backend::delete_tree).
/// - `read_value` distinguishes "absent" (`Ok(None)`) from "backend
///   unavailable" (`Err`); the adapter layer collapses both into the
///   caller-supplied default.
/// - Deleting an absent value or tree is a successful no-op.
pub trait Backend {
    /// Check whether a container exists.
    fn container_exists(&self, container: &str) -> bool;

    /// Create a container (and any missing ancestors).
    fn create_container(&mut self, container: &str) -> Result<()>;

    /// Read a named value from a container.
    fn read_value(&self, container: &str, name: &str) -> Result<Option<Value>>;

    /// Write a named value, creating the container if needed.
    fn write_value(&mut self, container: &str, name: &str, value: Value) -> Result<()>;

    /// Delete a single named value.
    fn delete_value(&mut self, container: &str, name: &str) -> Result<()>;

    /// Delete a container and everything beneath it.
    fn delete_tree(&mut self, container: &str) -> Result<()>;

    /// List the value names directly inside a container.
    fn list_values(&self, container: &str) -> Result<Vec<String>>;

    /// List the child container names directly inside a container.
    fn list_containers(&self, container: &str) -> Result<Vec<String>>;
}

/// Type alias for boxed trait object.
pub type BoxedBackend = Box<dyn Backend>;
