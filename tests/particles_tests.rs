// Host-side tests for the particle-field generator.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vektor_web::core::constants::{
    CONNECTION_CHECK_LIMIT, PARTICLE_COLOR_BRIGHT, PARTICLE_COLOR_DIM,
};
use vektor_web::core::*;

const EPS: f32 = 1e-4;

#[test]
fn full_profile_generates_800_particles_on_the_shell() {
    let config = DeviceProfile::Full.scene_config();
    assert_eq!(config.particle_count, 800);
    assert_eq!(config.connection_distance, 2.5);
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::build(&config, &mut rng);
    assert_eq!(field.positions.len(), 800);
    assert_eq!(field.colors.len(), 800);
    for p in &field.positions {
        let r = p.length();
        assert!(r >= 5.0 - EPS && r <= 9.0 + EPS, "radius {r} outside [5, 9]");
    }
}

#[test]
fn reduced_profile_generates_300_particles() {
    let config = DeviceProfile::Reduced.scene_config();
    assert_eq!(config.connection_distance, 1.8);
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::build(&config, &mut rng);
    assert_eq!(field.len(), 300);
    assert_eq!(field.colors.len(), 300);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = ParticleField::generate(50, &mut StdRng::seed_from_u64(1));
    let b = ParticleField::generate(50, &mut StdRng::seed_from_u64(1));
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.colors, b.colors);
}

#[test]
fn colors_lie_between_dim_and_bright() {
    let dim = srgb_hex_to_linear(PARTICLE_COLOR_DIM);
    let bright = srgb_hex_to_linear(PARTICLE_COLOR_BRIGHT);
    // Mix factor is at least 0.3, so no color is darker than that blend.
    let darkest = dim.lerp(bright, 0.3);
    let field = ParticleField::generate(200, &mut StdRng::seed_from_u64(3));
    for c in &field.colors {
        for i in 0..3 {
            assert!(c[i] >= darkest[i] - EPS && c[i] <= bright[i] + EPS);
        }
    }
}

#[test]
fn directions_cover_both_hemispheres() {
    let field = ParticleField::generate(800, &mut StdRng::seed_from_u64(11));
    let up = field.positions.iter().filter(|p| p.z > 0.0).count();
    // Uniform on the sphere: roughly half above the equator.
    assert!(up > 300 && up < 500, "{up} of 800 above the equator");
}

#[test]
fn ten_close_particles_make_45_segments() {
    let positions: Vec<Vec3> = (0..10).map(|i| Vec3::new(i as f32 * 0.1, 0.0, 0.0)).collect();
    let lines = connect(&positions, 2.5, 200);
    assert_eq!(lines.len(), 45);
}

#[test]
fn connect_only_checks_the_first_particles() {
    // 250 coincident particles: every pair is within range.
    let positions = vec![Vec3::ZERO; 250];
    let lines = connect(&positions, 1.0, CONNECTION_CHECK_LIMIT);
    assert_eq!(lines.len(), 200 * 199 / 2);
}

#[test]
fn connect_uses_strict_distance_threshold() {
    let mid = Vec3::new(1.0, 0.5, 0.0);
    let positions = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), mid];
    let lines = connect(&positions, 2.0, 200);
    // (0,1) sits exactly on the threshold and is skipped; (0,2) and (1,2) qualify
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], [Vec3::ZERO, mid]);
    assert_eq!(lines[1], [Vec3::new(2.0, 0.0, 0.0), mid]);
}

#[test]
fn connect_handles_tiny_inputs() {
    assert!(connect(&[], 2.5, 200).is_empty());
    assert!(connect(&[Vec3::ONE], 2.5, 200).is_empty());
}

#[test]
fn build_lines_respect_threshold() {
    let config = DeviceProfile::Full.scene_config();
    let field = ParticleField::build(&config, &mut StdRng::seed_from_u64(5));
    for [a, b] in &field.lines {
        assert!(a.distance(*b) < config.connection_distance);
    }
    assert!(field.lines.len() <= 200 * 199 / 2);
}

#[test]
fn srgb_conversion_endpoints() {
    assert!((srgb_hex_to_linear(0xFFFFFF) - Vec3::ONE).length() < EPS);
    assert_eq!(srgb_hex_to_linear(0x000000), Vec3::ZERO);
    // Mid grey in sRGB is about 0.214 linear
    let g = srgb_hex_to_linear(0x808080);
    assert!((g.x - 0.2158).abs() < 1e-3);
}
