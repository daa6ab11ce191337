/// Rendering and page-wiring constants for the browser frontend.
///
/// These keep element ids, sample counts and clamp limits out of the code
/// that uses them.
// DOM ids
pub const CANVAS_ID: &str = "scene-canvas";
pub const LOADER_ID: &str = "loader";

// Device pixel ratio clamp for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Multisample count for the scene pass (antialiasing)
pub const MSAA_SAMPLES: u32 = 4;

// Transparent clear so the page background shows through
pub const CLEAR_ALPHA: f64 = 0.0;

// Largest frame delta fed to the motion step (seconds); longer gaps are
// treated as a paused tab
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
