//! Device-class profile, chosen once from the viewport width at start-up and
//! injected into the scene builder.

use crate::core::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    /// Narrow viewports: fewer particles, tighter connections.
    Reduced,
    Full,
}

impl DeviceProfile {
    pub fn from_viewport_width(css_width: f64) -> Self {
        if css_width < MOBILE_MAX_WIDTH_PX {
            DeviceProfile::Reduced
        } else {
            DeviceProfile::Full
        }
    }

    pub fn scene_config(self) -> SceneConfig {
        match self {
            DeviceProfile::Reduced => SceneConfig {
                particle_count: REDUCED_PARTICLE_COUNT,
                connection_distance: REDUCED_CONNECTION_DISTANCE,
                point_size: REDUCED_POINT_SIZE,
                connection_check_limit: CONNECTION_CHECK_LIMIT,
            },
            DeviceProfile::Full => SceneConfig {
                particle_count: FULL_PARTICLE_COUNT,
                connection_distance: FULL_CONNECTION_DISTANCE,
                point_size: FULL_POINT_SIZE,
                connection_check_limit: CONNECTION_CHECK_LIMIT,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub connection_distance: f32,
    pub point_size: f32,
    pub connection_check_limit: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        DeviceProfile::Full.scene_config()
    }
}
