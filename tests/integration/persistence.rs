//! File-backed stores: registry state must survive process restarts.

use tempfile::TempDir;

use crate::common::{init_test_logging, rgb24_hd, yuy2_vga};

use vcamreg::Preferences;

#[test]
fn registry_survives_reopen() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("registry.json");

    let camera_path = {
        let mut prefs = Preferences::open(&path).unwrap();
        let camera_path = prefs.add_camera("Cam A", &[yuy2_vga(), rgb24_hd()]).unwrap();
        prefs.camera_set_control_value(0, "brightness", 64);
        prefs.set_picture("/tmp/placeholder.png");
        camera_path
    };

    let prefs = Preferences::open(&path).unwrap();
    assert_eq!(prefs.cameras_count(), 1);
    assert_eq!(prefs.camera_path(0), camera_path);
    assert_eq!(prefs.camera_description(0), "Cam A");
    assert_eq!(prefs.camera_formats(0), vec![yuy2_vga(), rgb24_hd()]);
    assert_eq!(prefs.camera_control_value(0, "brightness"), 64);
    assert_eq!(prefs.picture(), "/tmp/placeholder.png");
}

#[test]
fn removal_persists() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("registry.json");

    let p2 = {
        let mut prefs = Preferences::open(&path).unwrap();
        let p1 = prefs.add_camera("Cam A", &[yuy2_vga()]).unwrap();
        let p2 = prefs.add_camera("Cam B", &[rgb24_hd()]).unwrap();
        prefs.remove_camera(&p1);
        p2
    };

    let prefs = Preferences::open(&path).unwrap();
    assert_eq!(prefs.cameras_count(), 1);
    assert_eq!(prefs.camera_path(0), p2);
    assert_eq!(prefs.camera_description(0), "Cam B");
}

#[test]
fn fresh_store_is_empty() {
    init_test_logging();
    let temp = TempDir::new().unwrap();

    let prefs = Preferences::open(temp.path().join("registry.json")).unwrap();
    assert_eq!(prefs.cameras_count(), 0);
    assert_eq!(prefs.picture(), "");
}
