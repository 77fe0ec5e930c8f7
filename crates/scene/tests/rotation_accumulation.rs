//! Frame-accumulation behavior of the rotation state, driven the same way
//! the render loop drives it.

use scene::{RotationSpeed, Scene};
use std::f32::consts::FRAC_PI_2;

const FRAME_DELTA: f32 = 1.0 / 60.0;

#[test]
fn hundred_frames_accumulate_linearly() {
    let mut scene = Scene::new();
    scene.rotation_speed = RotationSpeed {
        x: 0.005,
        y: 0.005,
        z: 0.005,
    };

    for _ in 0..100 {
        scene.advance(FRAME_DELTA);
    }

    // start + n * s componentwise
    assert!((scene.rotation.x - 0.5).abs() < 1e-4);
    assert!((scene.rotation.y - 0.5).abs() < 1e-4);
    assert!((scene.rotation.z - (FRAC_PI_2 + 0.5)).abs() < 1e-4);
}

#[test]
fn zero_speed_holds_the_starting_pose() {
    let mut scene = Scene::new();
    scene.rotation_speed = RotationSpeed {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    for _ in 0..10_000 {
        scene.advance(FRAME_DELTA);
    }

    assert_eq!(scene.rotation.x, 0.0);
    assert_eq!(scene.rotation.y, 0.0);
    assert_eq!(scene.rotation.z, FRAC_PI_2);
}

#[test]
fn speed_changes_apply_from_the_next_frame() {
    let mut scene = Scene::new();
    scene.rotation_speed = RotationSpeed {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    for _ in 0..50 {
        scene.advance(FRAME_DELTA);
    }

    // A panel write lands between frames and only affects frames after it.
    scene.rotation_speed.x = 0.01;
    for _ in 0..10 {
        scene.advance(FRAME_DELTA);
    }

    assert!((scene.rotation.x - 0.1).abs() < 1e-5);
    assert_eq!(scene.rotation.y, 0.0);
}
