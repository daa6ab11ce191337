// Shared store/particle tuning constants used by the web frontend.

// Wizard
pub const TOTAL_STEPS: usize = 9;

// Pulse decay schedule (milliseconds after a trigger)
pub const PULSE_HALF_AFTER_MS: u64 = 200;
pub const PULSE_OFF_AFTER_MS: u64 = 600;

// Device profile
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // widths below this use the reduced profile

pub const FULL_PARTICLE_COUNT: usize = 800;
pub const FULL_CONNECTION_DISTANCE: f32 = 2.5;
pub const FULL_POINT_SIZE: f32 = 0.05;

pub const REDUCED_PARTICLE_COUNT: usize = 300;
pub const REDUCED_CONNECTION_DISTANCE: f32 = 1.8;
pub const REDUCED_POINT_SIZE: f32 = 0.06;

// Only the first N particles are checked pairwise for connection lines
pub const CONNECTION_CHECK_LIMIT: usize = 200;

// Particle shell
pub const SHELL_RADIUS_MIN: f32 = 5.0;
pub const SHELL_RADIUS_SPAN: f32 = 4.0;

// Palette (sRGB hex)
pub const PARTICLE_COLOR_BRIGHT: u32 = 0x3B82F6;
pub const PARTICLE_COLOR_DIM: u32 = 0x1E3A5F;
pub const BRIGHTNESS_MIN: f32 = 0.3;
pub const BRIGHTNESS_SPAN: f32 = 0.7;

// Line opacity
pub const LINE_BASE_OPACITY: f32 = 0.4;
pub const LINE_PROGRESS_OPACITY: f32 = 0.4; // added once the step reaches LINE_PROGRESS_STEPS
pub const LINE_PROGRESS_STEPS: f32 = 7.0; // progress divisor for the baseline ramp
pub const LINE_PULSE_OPACITY: f32 = 0.3; // added by a full pulse

// Idle rotation (radians per second)
pub const ROTATION_RATE_X: f32 = 0.02;
pub const ROTATION_RATE_Y: f32 = 0.05;

// Pointer parallax
pub const PARALLAX_DIVISOR: f32 = 20.0; // target offset = pointer * viewport / divisor
pub const PARALLAX_LERP_PER_FRAME: f32 = 0.05; // fraction covered per 60 Hz frame
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

// Camera
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
