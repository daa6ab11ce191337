pub mod actions;
pub mod camera;
pub mod constants;
pub mod error;
pub mod form;
pub mod motion;
pub mod particles;
pub mod profile;
pub mod pulse;
pub mod store;

pub use actions::*;
pub use camera::*;
pub use constants::TOTAL_STEPS;
pub use error::*;
pub use form::*;
pub use motion::*;
pub use particles::*;
pub use profile::*;
pub use pulse::*;
pub use store::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
