//! Device path allocation: uniqueness across repeated registration and
//! collision avoidance against pre-registered paths.

use std::collections::HashSet;

use crate::common::{store, yuy2_vga};

use vcamreg::{clsid_from_path, DEVICE_PREFIX, MAX_DEVICE_PATHS};

#[test]
fn repeated_registration_yields_distinct_paths() {
    let mut prefs = store();

    let paths: Vec<String> = (0..8)
        .map(|i| prefs.add_camera(&format!("Cam {i}"), &[yuy2_vga()]).unwrap())
        .collect();

    let unique: HashSet<&String> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());

    let clsids: HashSet<_> = paths.iter().map(|p| clsid_from_path(p)).collect();
    assert_eq!(clsids.len(), paths.len());
}

#[test]
fn allocator_skips_occupied_probe_slot() {
    let mut prefs = store();

    // Occupy the slot the first probe would produce.
    let first = format!("{DEVICE_PREFIX}0");
    prefs
        .add_camera_with_path(&first, "Squatter", &[yuy2_vga()])
        .unwrap();

    let allocated = prefs.add_camera("Cam", &[yuy2_vga()]).unwrap();
    assert_ne!(allocated, first);
    assert_eq!(allocated, format!("{DEVICE_PREFIX}1"));
}

#[test]
fn allocation_fails_when_registry_full() {
    let mut prefs = store();

    for i in 0..MAX_DEVICE_PATHS {
        prefs
            .add_camera_with_path(&format!("{DEVICE_PREFIX}{i}"), "Cam", &[yuy2_vga()])
            .unwrap();
    }

    assert!(prefs.create_device_path().is_none());
    assert!(prefs.add_camera("One too many", &[yuy2_vga()]).is_none());
    assert_eq!(prefs.cameras_count(), MAX_DEVICE_PATHS);
}

#[test]
fn freed_slot_is_reused() {
    let mut prefs = store();

    let p0 = prefs.add_camera("Cam A", &[yuy2_vga()]).unwrap();
    prefs.add_camera("Cam B", &[yuy2_vga()]).unwrap();
    prefs.remove_camera(&p0);

    let reallocated = prefs.add_camera("Cam C", &[yuy2_vga()]).unwrap();
    assert_eq!(reallocated, p0);
}
