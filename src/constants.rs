//! Global constants for annotation sessions

/// Directory name used under the platform config/data directories
pub const APP_DIR: &str = "annotation-session";

/// Pen color for new strokes
pub const DEFAULT_PEN_COLOR: &str = "#ff3b30";

/// Pen width for new strokes
pub const DEFAULT_PEN_WIDTH: f32 = 4.0;

/// Extra reach around a stroke for eraser taps
pub const DEFAULT_ERASER_TOLERANCE: f32 = 8.0;

/// Viewport size (width, height) used until the host reports its own
pub const DEFAULT_VIEWPORT_SIZE: (f32, f32) = (390.0, 844.0);

/// Pages rendered on each side of the visible one
pub const DEFAULT_ADJACENT_PAGES: usize = 1;

/// Prefix of generated note ids
pub const NOTE_ID_PREFIX: &str = "note-";
