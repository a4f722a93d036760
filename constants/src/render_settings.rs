use bevy::color::Color;

/// Sphere radius used for every point unless overridden on the command line
pub const SPHERE_RADIUS: f32 = 0.01;

/// UV sphere tessellation (sectors, stacks). Kept low since every point is a sphere.
pub const SPHERE_SECTORS: u32 = 12;
pub const SPHERE_STACKS: u32 = 8;

/// Base colour shared by all flow map spheres (linear RGBA)
pub const SPHERE_COLOUR: Color = Color::linear_rgba(0.12, 0.5, 0.69, 1.0);

pub const BACKGROUND_COLOUR: Color = Color::BLACK;

/// Ambient and distant light intensity, both in 0..1 scene units
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const DISTANT_INTENSITY: f32 = 0.4;

/// Scale from unit light intensity to Bevy photometric units
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 1000.0;
pub const DISTANT_ILLUMINANCE_SCALE: f32 = 10_000.0;

/// Seconds each timestep stays on screen while animating
pub const ANIMATION_DWELL_SECS: f32 = 3.0;
