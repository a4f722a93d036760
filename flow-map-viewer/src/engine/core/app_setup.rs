use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use constants::render_settings::BACKGROUND_COLOUR;
use flow_map_loader::FlowMapSequence;

use crate::cli::ViewerArgs;
use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller, spawn_camera};
use crate::engine::core::settings::{FlowMaps, ViewerSettings};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::spheres::{apply_timestep, create_sphere_pool};
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
use crate::engine::systems::playback::{
    Playback, ShowTimestep, advance_animation, commit_time_slider,
};
use crate::timeline::TimeSlider;
use crate::ui::control_panel::{
    animation_toggle_input, refresh_control_panel, slider_input, spawn_control_panel,
};

/// Build the viewer app. Flow maps are inserted separately with
/// [`insert_flow_maps`] once the log subscriber is up.
pub fn create_app(args: &ViewerArgs) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(args))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(BACKGROUND_COLOUR))
        .insert_resource(ViewerSettings::from(args))
        .init_resource::<Playback>()
        .add_event::<ShowTimestep>();

    app.add_systems(Startup, (setup, spawn_control_panel));

    // Input -> commit -> animation -> scene -> widgets, once per frame.
    app.add_systems(
        Update,
        (
            slider_input,
            animation_toggle_input,
            commit_time_slider,
            advance_animation,
            apply_timestep,
            refresh_control_panel,
        )
            .chain(),
    )
    .add_systems(Update, (orbit_camera_controller, fps_text_update_system));

    app
}

/// Hand the loaded sequence to the app and size the slider and camera to it.
pub fn insert_flow_maps(app: &mut App, sequence: FlowMapSequence) {
    let last = sequence.len().saturating_sub(1);
    app.insert_resource(TimeSlider::new(0, last, 0))
        .insert_resource(OrbitCamera::with_bounds(sequence.bounds()))
        .insert_resource(FlowMaps(sequence));
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    orbit: Res<OrbitCamera>,
) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &orbit);
    create_sphere_pool(
        &mut commands,
        &mut meshes,
        &mut materials,
        settings.sphere_radius,
    );
    spawn_fps_overlay(&mut commands);
}

fn create_default_plugins(args: &ViewerArgs) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(args.width, args.height)),
        ..default()
    };

    DefaultPlugins.set(window_config)
}
