use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS_SCALE, AMBIENT_INTENSITY, DISTANT_ILLUMINANCE_SCALE, DISTANT_INTENSITY,
};

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DISTANT_INTENSITY * DISTANT_ILLUMINANCE_SCALE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
