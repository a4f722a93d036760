use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use constants::window_settings::WINDOW_TITLE;

pub fn create_window_config(width: u32, height: u32) -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(width as f32, height as f32),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
