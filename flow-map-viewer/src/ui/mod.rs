//! Widget overlay for driving the viewer.
//!
//! ## Control Panel
//!
//! Docked along the bottom edge of the window:
//! - **Time Slider**: one track segment per timestep. Click or drag along the
//!   track to scrub; `Left`/`Right` step by one, `Home`/`End` jump to the ends.
//! - **Animation**: toggle button (or `Space`). Walks every timestep from the
//!   first, holding each for the configured dwell, then switches itself off.
//! - **Label**: timestep index, count and the time parsed from the file name.
//!
//! Widgets only edit [`crate::timeline::TimeSlider`]; the playback systems
//! decide what reaches the scene.

/// Control panel layout, input handling and refresh.
pub mod control_panel;
