//! Common test utilities for the registry store.
#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

use vcamreg::{Fraction, Preferences, VideoFormat};

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory store.
#[must_use]
pub fn store() -> Preferences {
    init_test_logging();
    Preferences::in_memory()
}

#[must_use]
pub fn yuy2_vga() -> VideoFormat {
    VideoFormat::new("YUY2", 640, 480, Fraction::new(30, 1))
}

#[must_use]
pub fn rgb24_hd() -> VideoFormat {
    VideoFormat::new("RGB24", 1280, 720, Fraction::new(30000, 1001))
}

#[must_use]
pub fn nv12_fhd() -> VideoFormat {
    VideoFormat::new("NV12", 1920, 1080, Fraction::new(60, 1))
}
