//! Per-frame runtime systems.

/// FPS readout overlay.
pub mod fps_tracking;

/// Slider commits and animation playback, emitting timestep requests.
pub mod playback;
