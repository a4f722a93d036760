//! Orbit camera for flow map inspection.
//!
//! Left-drag rotates around the focus point, right-drag pans, the scroll wheel
//! zooms and `R` returns to the framing computed from the dataset bounds.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
