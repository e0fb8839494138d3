// Tilt tuning constants shared by the web and native front-ends.

// Convergence
pub const DEFAULT_SMOOTHING: f32 = 0.12; // fraction of remaining distance covered per tick
pub const DEFAULT_EPSILON: f32 = 0.1; // settle threshold, percentage units per axis
pub const MIN_SMOOTHING: f32 = 0.01;
pub const MAX_SMOOTHING: f32 = 0.99;
pub const MIN_EPSILON: f32 = 1.0e-3; // f32 steps near 100 must still exceed this

// Normalized space
pub const PERCENT_MIN: f32 = 0.0;
pub const PERCENT_MAX: f32 = 100.0;
pub const PERCENT_CENTER: f32 = 50.0;
pub const MIN_CONTAINER_SIZE: f32 = 1.0; // zero-size containers divide by this instead

// Background parallax band (percent)
pub const BACKGROUND_MIN: f32 = 35.0;
pub const BACKGROUND_MAX: f32 = 65.0;

// Rotation: degrees = offset-from-center / divisor
pub const ROTATE_X_DIVISOR: f32 = 5.0;
pub const ROTATE_Y_DIVISOR: f32 = 4.0;

// Decimal places kept on rounded outputs
pub const OUTPUT_DECIMALS: i32 = 3;

// Static card look
pub const DEFAULT_INNER_GRADIENT: &str = "linear-gradient(145deg,#60496e8c 0%,#71C4FF44 100%)";
pub const DEFAULT_BEHIND_GLOW_COLOR: &str = "rgba(125, 190, 255, 0.67)";
pub const DEFAULT_BEHIND_GLOW_SIZE: &str = "50%";
