//! Camera registry behavior: the add/remove lifecycle, contiguous
//! reindexing after removal, and format round-trips.

use crate::common::{nv12_fhd, rgb24_hd, store, yuy2_vga};

use vcamreg::{Fraction, VideoFormat};

#[test]
fn two_camera_lifecycle() {
    let mut prefs = store();
    assert_eq!(prefs.cameras_count(), 0);

    let p1 = prefs.add_camera("Cam A", &[yuy2_vga()]).unwrap();
    assert_eq!(prefs.cameras_count(), 1);

    let p2 = prefs.add_camera("Cam B", &[rgb24_hd()]).unwrap();
    assert_ne!(p2, p1);
    assert_eq!(prefs.cameras_count(), 2);

    prefs.remove_camera(&p1);

    assert_eq!(prefs.cameras_count(), 1);
    assert_eq!(prefs.camera_path(0), p2);
    assert_eq!(prefs.camera_description(0), "Cam B");
    assert_eq!(prefs.camera_formats(0), vec![rgb24_hd()]);
}

#[test]
fn removal_reindexes_for_every_slot() {
    const N: usize = 5;

    for removed in 0..N {
        let mut prefs = store();

        let paths: Vec<String> = (0..N)
            .map(|i| prefs.add_camera(&format!("Cam {i}"), &[yuy2_vga()]).unwrap())
            .collect();

        prefs.remove_camera(&paths[removed]);

        assert_eq!(prefs.cameras_count(), N - 1);

        for slot in 0..(N - 1) {
            let expected = if slot < removed { slot } else { slot + 1 };
            assert_eq!(
                prefs.camera_path(slot),
                paths[expected],
                "slot {slot} after removing index {removed}"
            );
            assert_eq!(prefs.camera_description(slot), format!("Cam {expected}"));
        }
    }
}

#[test]
fn removal_cascades_to_formats_and_controls() {
    let mut prefs = store();
    let p1 = prefs.add_camera("Cam A", &[yuy2_vga(), rgb24_hd()]).unwrap();
    let p2 = prefs.add_camera("Cam B", &[nv12_fhd()]).unwrap();

    prefs.camera_set_control_value(0, "brightness", 100);
    prefs.camera_set_control_value(1, "brightness", 200);

    prefs.remove_camera(&p1);

    // Cam B moved into slot 0 with its formats and controls intact.
    assert_eq!(prefs.camera_path(0), p2);
    assert_eq!(prefs.camera_formats(0), vec![nv12_fhd()]);
    assert_eq!(prefs.camera_control_value(0, "brightness"), 200);

    // Nothing remains in the vacated slot beyond Cam B's records.
    assert_eq!(prefs.cameras_count(), 1);
    assert_eq!(prefs.formats_count(1), 0);
}

#[test]
fn format_round_trip_preserves_rate_text() {
    let mut prefs = store();
    let formats = vec![
        VideoFormat::new("YUY2", 640, 480, Fraction::new(30000, 1001)),
        VideoFormat::new("NV12", 1920, 1080, Fraction::new(24, 1)),
    ];

    prefs.add_camera("Cam", &formats).unwrap();

    let read_back = prefs.camera_formats(0);
    assert_eq!(read_back, formats);

    let fps = prefs.camera_format(0, 0).fps;
    assert_eq!(fps.num(), 30000);
    assert_eq!(fps.den(), 1001);
}

#[test]
fn out_of_range_format_reads_invalid() {
    let mut prefs = store();
    prefs.add_camera("Cam", &[yuy2_vga()]).unwrap();

    assert!(!prefs.camera_format(0, 5).is_valid());
    assert!(!prefs.camera_format(3, 0).is_valid());
}

#[test]
fn format_list_editing() {
    let mut prefs = store();
    prefs.add_camera("Cam", &[yuy2_vga()]).unwrap();

    prefs.camera_add_format(0, rgb24_hd(), Some(0));
    prefs.camera_add_format(0, nv12_fhd(), None);
    assert_eq!(
        prefs.camera_formats(0),
        vec![rgb24_hd(), yuy2_vga(), nv12_fhd()]
    );

    prefs.camera_remove_format(0, 1);
    assert_eq!(prefs.camera_formats(0), vec![rgb24_hd(), nv12_fhd()]);

    // First format in the list is the camera's default.
    assert_eq!(prefs.camera_format(0, 0), rgb24_hd());
}

#[test]
fn default_on_miss() {
    let prefs = store();

    assert_eq!(prefs.read_int("nonexistent", 42), 42);
    assert_eq!(prefs.read_string("nonexistent", "def"), "def");
    assert_eq!(prefs.camera_control_value(7, "brightness"), 0);
}

#[test]
fn global_settings() {
    let mut prefs = store();

    prefs.set_picture("/tmp/placeholder.png");
    prefs.set_log_level(4);
    prefs.add_camera("Cam", &[yuy2_vga()]).unwrap();
    prefs.remove_all_cameras();

    assert_eq!(prefs.picture(), "/tmp/placeholder.png");
    assert_eq!(prefs.log_level(), 4);
}
