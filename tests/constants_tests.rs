// Host-side tests for constants and their relationships.
// The browser modules are wasm-only, so we include the constants file directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use vektor_web::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_constants_are_within_reasonable_bounds() {
    assert!(DPR_MIN >= 1.0);
    assert!(DPR_MAX >= DPR_MIN);
    assert!(MSAA_SAMPLES.is_power_of_two());
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!((0.0..=1.0).contains(&CLEAR_ALPHA));
    assert!(!CANVAS_ID.is_empty());
    assert_ne!(CANVAS_ID, LOADER_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_schedule_is_ordered() {
    assert!(PULSE_HALF_AFTER_MS > 0);
    assert!(PULSE_OFF_AFTER_MS > PULSE_HALF_AFTER_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reduced_profile_is_lighter_than_full() {
    assert!(REDUCED_PARTICLE_COUNT < FULL_PARTICLE_COUNT);
    assert!(REDUCED_CONNECTION_DISTANCE < FULL_CONNECTION_DISTANCE);
    assert!(CONNECTION_CHECK_LIMIT <= REDUCED_PARTICLE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shell_and_brightness_ranges_are_sane() {
    assert!(SHELL_RADIUS_MIN > 0.0);
    assert!(SHELL_RADIUS_SPAN > 0.0);
    assert!(BRIGHTNESS_MIN + BRIGHTNESS_SPAN <= 1.0 + f32::EPSILON);
    assert!(PARALLAX_LERP_PER_FRAME > 0.0 && PARALLAX_LERP_PER_FRAME < 1.0);
    // camera sits outside the particle shell
    assert!(CAMERA_Z > SHELL_RADIUS_MIN + SHELL_RADIUS_SPAN);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
}
