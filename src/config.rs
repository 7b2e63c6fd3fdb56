//! Configuration constants for the dodger track.

// Track geometry (pixels)
pub const TRACK_WIDTH: i32 = 400;
pub const TRACK_HEIGHT: i32 = 400;
pub const DODGER_WIDTH: i32 = 40;
pub const DODGER_HEIGHT: i32 = 20;
pub const MAX_LEFT: i32 = TRACK_WIDTH - DODGER_WIDTH; // 360, rightmost valid offset

// Movement
pub const STEP_PX: i32 = 1; // Pixels per key press
pub const DEFAULT_START_LEFT: i32 = 180;

// Style encoding
pub const PIXEL_UNIT: &str = "px";
pub const DODGER_ELEMENT_ID: &str = "dodger";

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 860; // Scaled track plus status bar
pub const STATUS_BAR_HEIGHT: i32 = 60;
pub const FONT_SIZE: f32 = 24.0;
