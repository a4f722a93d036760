pub const WINDOW_TITLE: &str = "Flow Map Viewer";
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 512;

/// Height of the control panel docked at the bottom of the window (logical px)
pub const CONTROL_PANEL_HEIGHT: f32 = 72.0;
