/// Shared configuration for flow map loading and rendering
pub mod render_settings;
pub mod ui_palette;
pub mod window_settings;
