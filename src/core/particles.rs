use crate::core::constants::*;
use crate::core::profile::SceneConfig;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Decorative point cloud on a spherical shell plus the segments joining
/// nearby points.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    /// Linear RGB, one per position.
    pub colors: Vec<Vec3>,
    pub lines: Vec<[Vec3; 2]>,
}

impl ParticleField {
    /// Sample `count` particles: uniform directions on the sphere, radius
    /// uniform in `[5, 9]`, brightness mixed between the dim and bright hue.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let dim = srgb_hex_to_linear(PARTICLE_COLOR_DIM);
        let bright = srgb_hex_to_linear(PARTICLE_COLOR_BRIGHT);
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let radius = SHELL_RADIUS_MIN + rng.gen::<f32>() * SHELL_RADIUS_SPAN;
            positions.push(spherical_to_cartesian(radius, theta, phi));

            let brightness = BRIGHTNESS_MIN + rng.gen::<f32>() * BRIGHTNESS_SPAN;
            colors.push(dim.lerp(bright, brightness));
        }
        Self {
            positions,
            colors,
            lines: Vec::new(),
        }
    }

    /// Generate the cloud and its connections for a device profile.
    pub fn build<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let mut field = Self::generate(config.particle_count, rng);
        field.lines = connect(
            &field.positions,
            config.connection_distance,
            config.connection_check_limit,
        );
        log::info!(
            "[particles] points={} lines={} dist={:.2}",
            field.positions.len(),
            field.lines.len(),
            config.connection_distance
        );
        field
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Segments between every pair among the first `check_limit` positions whose
/// distance is strictly below `max_distance`.
pub fn connect(positions: &[Vec3], max_distance: f32, check_limit: usize) -> Vec<[Vec3; 2]> {
    let head = &positions[..positions.len().min(check_limit)];
    let mut lines = Vec::new();
    for (i, a) in head.iter().enumerate() {
        for b in &head[i + 1..] {
            if a.distance(*b) < max_distance {
                lines.push([*a, *b]);
            }
        }
    }
    lines
}

#[inline]
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// `0xRRGGBB` in sRGB to linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
