/// Flow map sequence inspector entry point
use clap::Parser;
use flow_map_loader::{FlowMapSequence, PointType, SequenceSummary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flow-map-inspect", about = "Print statistics for a flow map sequence")]
struct Args {
    /// Directories holding one .raw file per timestep
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Scalar type of the stored coordinates
    #[arg(short = 't', long, default_value_t = PointType::Float32)]
    dtype: PointType,

    /// Write a JSON summary to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let sequence = FlowMapSequence::load(&args.dirs, args.dtype)?;
    let summary = SequenceSummary::new(&sequence, args.dtype);

    println!(
        "{} timesteps, {} points total, at most {} per timestep",
        summary.timestep_count, summary.total_points, summary.max_points
    );
    for step in &summary.timesteps {
        match &step.bounds {
            Some(b) => println!(
                "  [{:>4}] t={:<6} {:>9} points  x[{:.4}, {:.4}] y[{:.4}, {:.4}] z[{:.4}, {:.4}]",
                step.index,
                step.time,
                step.point_count,
                b.min_x,
                b.max_x,
                b.min_y,
                b.max_y,
                b.min_z,
                b.max_z
            ),
            None => println!(
                "  [{:>4}] t={:<6} {:>9} points",
                step.index, step.time, step.point_count
            ),
        }
    }

    if let Some(path) = &args.json {
        summary.write_json(path)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
