// Host-side tests for pure input functions.
// The browser modules are wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn client_to_ndc_maps_corners_and_centre() {
    assert!(approx(client_to_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0)));
    assert!(approx(client_to_ndc(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0)));
    assert!(approx(client_to_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO));
}

#[test]
fn client_to_ndc_y_points_up() {
    let top = client_to_ndc(50.0, 10.0, 100.0, 100.0);
    let bottom = client_to_ndc(50.0, 90.0, 100.0, 100.0);
    assert!(top.y > 0.0);
    assert!(bottom.y < 0.0);
}

#[test]
fn client_to_ndc_clamps_outside_viewport() {
    let p = client_to_ndc(-50.0, 500.0, 100.0, 100.0);
    assert!(approx(p, Vec2::new(-1.0, -1.0)));
}

#[test]
fn client_to_ndc_degenerate_viewport_is_centre() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 100.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(10.0, 10.0, 100.0, 0.0), Vec2::ZERO);
}

#[test]
fn aspect_ratio_guards_zero_height() {
    assert!((aspect_ratio(1920, 1080) - 16.0 / 9.0).abs() < 1e-5);
    assert_eq!(aspect_ratio(300, 0), 300.0);
}
