use glam::Vec2;

/// Latest pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// Map a client-space position to NDC: x in [-1, 1] left to right, y in
/// [-1, 1] bottom to top. Degenerate viewports map to the centre.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = 1.0 - (client_y / height) * 2.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
