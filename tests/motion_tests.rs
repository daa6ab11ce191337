// Host-side tests for scene motion, camera framing and line opacity.

use glam::{Vec2, Vec3};
use vektor_web::core::*;

#[test]
fn zero_dt_changes_nothing() {
    let mut m = SceneMotion::default();
    m.advance(0.0, Vec2::new(1.0, 1.0), Vec2::new(10.0, 10.0));
    assert_eq!(m, SceneMotion::default());
}

#[test]
fn rotation_rates_per_second() {
    let mut m = SceneMotion::default();
    for _ in 0..60 {
        m.advance(1.0 / 60.0, Vec2::ZERO, Vec2::ONE);
    }
    assert!((m.rotation.x - 0.02).abs() < 1e-4);
    assert!((m.rotation.y - 0.05).abs() < 1e-4);
}

#[test]
fn parallax_target_scales_with_viewport() {
    let t = parallax_target(Vec2::new(1.0, -1.0), Vec2::new(20.0, 10.0));
    assert!((t - Vec2::new(1.0, -0.5)).length() < 1e-6);
}

#[test]
fn smoothing_alpha_matches_five_percent_per_frame() {
    assert!((smoothing_alpha(1.0 / 60.0) - 0.05).abs() < 1e-4);
    assert_eq!(smoothing_alpha(0.0), 0.0);
    // Two half frames cover the same ground as one full frame
    let half = smoothing_alpha(1.0 / 120.0);
    let combined = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((combined - 0.05).abs() < 1e-4);
}

#[test]
fn offset_converges_to_pointer_target() {
    let mut m = SceneMotion::default();
    let viewport = Vec2::new(20.0, 10.0);
    let pointer = Vec2::new(0.5, 0.5);
    for _ in 0..600 {
        m.advance(1.0 / 60.0, pointer, viewport);
    }
    let target = parallax_target(pointer, viewport);
    assert!((m.offset - target).length() < 1e-3);
}

#[test]
fn model_matrix_applies_offset() {
    let m = SceneMotion {
        rotation: Vec2::ZERO,
        offset: Vec2::new(0.3, -0.2),
    };
    let p = m.model_matrix().transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(0.3, -0.2, 0.0)).length() < 1e-6);
}

#[test]
fn rotation_preserves_shell_radius() {
    let m = SceneMotion {
        rotation: Vec2::new(0.7, 1.3),
        offset: Vec2::ZERO,
    };
    let p = m.model_matrix().transform_point3(Vec3::new(0.0, 0.0, 7.0));
    assert!((p.length() - 7.0).abs() < 1e-4);
}

#[test]
fn line_opacity_follows_progress_and_pulse() {
    assert!((base_line_opacity(0) - 0.4).abs() < 1e-6);
    assert!((base_line_opacity(7) - 0.8).abs() < 1e-6);
    assert!(base_line_opacity(3) > base_line_opacity(2));
    assert!((line_opacity(0.4, 1.0) - 0.7).abs() < 1e-6);
    assert!((line_opacity(0.4, 0.5) - 0.55).abs() < 1e-6);
    assert_eq!(line_opacity(0.6, 0.0), 0.6);
}

#[test]
fn camera_viewport_matches_fov() {
    let cam = Camera::new(2.0);
    let vp = cam.viewport_at_target();
    let expected_h = 2.0 * 10.0 * (30.0_f32).to_radians().tan();
    assert!((vp.y - expected_h).abs() < 1e-3);
    assert!((vp.x - expected_h * 2.0).abs() < 1e-3);
}

#[test]
fn camera_rejects_bad_aspect() {
    let mut cam = Camera::new(f32::NAN);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(0.0);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(1.5);
    assert_eq!(cam.aspect, 1.5);
}

#[test]
fn origin_projects_to_screen_centre() {
    let cam = Camera::new(1.0);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    assert!((clip.x / clip.w).abs() < 1e-6);
    assert!((clip.y / clip.w).abs() < 1e-6);
    let depth = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&depth));
}

#[test]
fn profile_threshold_at_768px() {
    assert_eq!(DeviceProfile::from_viewport_width(375.0), DeviceProfile::Reduced);
    assert_eq!(DeviceProfile::from_viewport_width(767.9), DeviceProfile::Reduced);
    assert_eq!(DeviceProfile::from_viewport_width(768.0), DeviceProfile::Full);
    assert_eq!(SceneConfig::default(), DeviceProfile::Full.scene_config());
    assert_eq!(DeviceProfile::Reduced.scene_config().particle_count, 300);
}
