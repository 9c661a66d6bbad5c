//! Virtual-camera device registry persistence layer.
//!
//! This library stores and retrieves the configuration of zero or more
//! virtual camera devices (identity, description, supported formats,
//! per-control values) plus a handful of global settings, backed by a
//! hierarchical, path-addressed key-value store.
//!
//! # Modules
//!
//! - `backend`: Hierarchical key-value backend abstraction and bundled
//!   implementations (in-memory, JSON file)
//! - `error`: Error types for the backend boundary
//! - `format`: Video format and rational frame-rate records
//! - `ident`: Device path to CLSID derivation
//! - `logging`: Structured logging initialization
//! - `store`: The schema-aware preferences store
#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod format;
pub mod ident;
pub mod logging;
pub mod store;

pub use backend::{Backend, FileBackend, MemoryBackend, Value};
pub use error::{RegistryError, Result};
pub use format::{Fraction, VideoFormat};
pub use ident::{clsid_from_path, Clsid};
pub use store::{Preferences, DEFAULT_LOG_LEVEL, DEVICE_PREFIX, MAX_DEVICE_PATHS, ROOT_KEY};
