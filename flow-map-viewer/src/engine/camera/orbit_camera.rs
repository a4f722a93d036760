use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::{prelude::*, window::PrimaryWindow};
use constants::window_settings::CONTROL_PANEL_HEIGHT;
use flow_map_loader::FlowMapBounds;

const ORBIT_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.0015;
const ZOOM_BASE: f32 = 0.9;
const PITCH_LIMIT: f32 = 1.55;
const DEFAULT_PITCH: f32 = -0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Orbit,
    Pan,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub dragging: Option<DragMode>,
    home_focus: Vec3,
    home_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 3.0)
    }
}

impl OrbitCamera {
    pub fn new(focus: Vec3, distance: f32) -> Self {
        Self {
            focus,
            distance,
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            min_distance: distance * 0.01,
            dragging: None,
            home_focus: focus,
            home_distance: distance,
        }
    }

    /// Frame the whole dataset from the +Z side.
    pub fn with_bounds(bounds: &FlowMapBounds) -> Self {
        let center = Vec3::from_array(bounds.center());
        let radius = (Vec3::from_array(bounds.size()).length() * 0.5).max(0.5);
        Self::new(center, radius * 3.0)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the focus in the view plane; screen-space drag follows the cursor.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.distance * PAN_SENSITIVITY;
        self.focus += (up * delta.y - right * delta.x) * scale;
    }

    /// Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * ZOOM_BASE.powf(scroll)).max(self.min_distance);
    }

    pub fn reset(&mut self) {
        self.focus = self.home_focus;
        self.distance = self.home_distance;
        self.yaw = 0.0;
        self.pitch = DEFAULT_PITCH;
    }

    /// Camera transform looking at the focus point.
    pub fn transform(&self) -> Transform {
        let rotation = self.rotation();
        Transform {
            translation: self.focus + rotation * Vec3::Z * self.distance,
            rotation,
            ..default()
        }
    }
}

/// True when the cursor sits over the control panel docked at the bottom.
pub fn cursor_over_control_panel(window: &Window) -> bool {
    window
        .cursor_position()
        .is_some_and(|cursor| cursor.y > window.height() - CONTROL_PANEL_HEIGHT)
}

pub fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((Camera3d::default(), orbit.transform()));
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };
    let over_panel = windows.single().is_ok_and(cursor_over_control_panel);

    // Drags only start outside the panel so scrubbing never moves the camera.
    if orbit.dragging.is_none() && !over_panel {
        if mouse_button.just_pressed(MouseButton::Left) {
            orbit.dragging = Some(DragMode::Orbit);
        } else if mouse_button.just_pressed(MouseButton::Right) {
            orbit.dragging = Some(DragMode::Pan);
        }
    }
    let released = match orbit.dragging {
        Some(DragMode::Orbit) => !mouse_button.pressed(MouseButton::Left),
        Some(DragMode::Pan) => !mouse_button.pressed(MouseButton::Right),
        None => false,
    };
    if released {
        orbit.dragging = None;
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        match orbit.dragging {
            Some(DragMode::Orbit) => orbit.orbit(mouse_delta),
            Some(DragMode::Pan) => orbit.pan(mouse_delta),
            None => {}
        }
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON && !over_panel {
        orbit.zoom(scroll_accum);
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        orbit.reset();
    }

    let target = orbit.transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
