use crate::core::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Per-frame transform shared by the point cloud and its lines: a slow idle
/// rotation plus a pointer-driven parallax offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneMotion {
    /// Accumulated Euler angles (x, y) in radians.
    pub rotation: Vec2,
    /// World-space offset in the xy plane.
    pub offset: Vec2,
}

impl SceneMotion {
    /// Advance by `dt_sec`. `pointer_ndc` is in [-1, 1] with y up and
    /// `viewport` is the world-space size visible at the origin.
    pub fn advance(&mut self, dt_sec: f32, pointer_ndc: Vec2, viewport: Vec2) {
        let dt = dt_sec.max(0.0);
        self.rotation.x += dt * ROTATION_RATE_X;
        self.rotation.y += dt * ROTATION_RATE_Y;

        let target = parallax_target(pointer_ndc, viewport);
        let alpha = smoothing_alpha(dt);
        self.offset += (target - self.offset) * alpha;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.offset.x, self.offset.y, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

#[inline]
pub fn parallax_target(pointer_ndc: Vec2, viewport: Vec2) -> Vec2 {
    pointer_ndc * viewport / PARALLAX_DIVISOR
}

/// Lerp factor for `dt_sec` equivalent to covering 5% of the gap per 60 Hz
/// frame, independent of the actual frame rate.
#[inline]
pub fn smoothing_alpha(dt_sec: f32) -> f32 {
    let frames = dt_sec * REFERENCE_FRAME_RATE;
    1.0 - (1.0 - PARALLAX_LERP_PER_FRAME).powf(frames)
}

/// Baseline line opacity for the current wizard step.
#[inline]
pub fn base_line_opacity(step: usize) -> f32 {
    LINE_BASE_OPACITY + (step as f32 / LINE_PROGRESS_STEPS) * LINE_PROGRESS_OPACITY
}

#[inline]
pub fn line_opacity(base: f32, pulse: f32) -> f32 {
    base + pulse * LINE_PULSE_OPACITY
}
