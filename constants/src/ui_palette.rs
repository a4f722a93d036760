use bevy::color::Color;

pub const PANEL_BACKGROUND: Color = Color::srgba(0.10, 0.11, 0.13, 0.92);
pub const HEADER_BACKGROUND: Color = Color::srgb(0.14, 0.16, 0.20);
pub const TRACK_BACKGROUND: Color = Color::srgb(0.22, 0.24, 0.28);
pub const TRACK_FILLED: Color = Color::srgb(0.26, 0.52, 0.70);
pub const TRACK_HANDLE: Color = Color::srgb(0.85, 0.88, 0.92);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_ACTIVE: Color = Color::srgb(0.30, 0.34, 0.40);
pub const BORDER: Color = Color::srgba(0.0, 0.0, 0.0, 0.25);
pub const TEXT: Color = Color::srgb(1.0, 1.0, 1.0);
pub const FPS_TEXT: Color = Color::srgb(1.0, 0.0, 0.0);

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
