use clap::Parser;
use constants::render_settings::{ANIMATION_DWELL_SECS, SPHERE_RADIUS};
use constants::window_settings::{WINDOW_HEIGHT, WINDOW_WIDTH};
use flow_map_loader::PointType;
use std::path::PathBuf;

/// Interactive viewer for time-varying flow map point clouds
#[derive(Parser, Debug, Clone)]
#[command(name = "flow-map-viewer")]
pub struct ViewerArgs {
    /// Directories holding one .raw file per timestep
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,

    /// Scalar type of the stored coordinates
    #[arg(short = 't', long, default_value_t = PointType::Float32)]
    pub dtype: PointType,

    /// Radius of the sphere drawn for each point
    #[arg(short = 'r', long, default_value_t = SPHERE_RADIUS, value_parser = positive_f32)]
    pub radius: f32,

    /// Seconds each timestep stays on screen while animating
    #[arg(long, default_value_t = ANIMATION_DWELL_SECS, value_parser = positive_f32)]
    pub dwell: f32,

    /// Window width in logical pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: u32,
}

fn positive_f32(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("expected a positive number, got {s}"))
    }
}
