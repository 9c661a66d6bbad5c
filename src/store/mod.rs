//! Schema-aware preferences store for the device registry.
//!
//! [`Preferences`] maps camera, format, and control records onto flat
//! slash-delimited keys inside an injected [`Backend`], and owns the
//! device-path allocation that keeps the external identifier space
//! collision-free.

mod adapter;
mod alloc;
mod keypath;
mod schema;
mod settings;

pub use alloc::{DEVICE_PREFIX, MAX_DEVICE_PATHS};
pub use keypath::{ROOT_KEY, SEPARATOR};
pub use settings::DEFAULT_LOG_LEVEL;

use std::path::Path;

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::error::Result;
use crate::ident::{clsid_from_path, Clsid};

/// Device-path to class-identifier derivation function.
pub type DeriveFn = fn(&str) -> Clsid;

/// The device registry's persistence layer.
///
/// Reads degrade to caller-supplied defaults and writes are best-effort:
/// a failed backend call never surfaces through the schema API, so callers
/// must treat default/empty results as ambiguous between "absent" and
/// "backend error".
///
/// Compound operations (add/remove camera, format rewrites, reindexing)
/// are sequences of independent backend writes with no rollback. The store
/// assumes single-writer-at-a-time access: callers serialize compound
/// operations externally (the host system uses a cross-process lock for
/// this); the store itself never blocks and never spawns work.
pub struct Preferences {
    backend: Box<dyn Backend>,
    derive: DeriveFn,
}

impl Preferences {
    /// Create a store over any backend, using the built-in path-to-CLSID
    /// derivation.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            derive: clsid_from_path,
        }
    }

    /// Create a store with a custom identifier derivation.
    pub fn with_derivation(backend: impl Backend + 'static, derive: DeriveFn) -> Self {
        Self {
            backend: Box::new(backend),
            derive,
        }
    }

    /// Open a file-persisted store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(FileBackend::open(path)?))
    }

    /// Create an in-memory store (useful for testing).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    pub(crate) fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub(crate) fn backend_mut(&mut self) -> &mut dyn Backend {
        self.backend.as_mut()
    }

    pub(crate) fn derive_clsid(&self, path: &str) -> Clsid {
        (self.derive)(path)
    }
}
