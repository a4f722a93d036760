use bevy::prelude::*;
use clap::Parser;
use flow_map_loader::FlowMapSequence;

mod cli;
mod engine;
mod timeline;
mod ui;

use cli::ViewerArgs;
use engine::core::app_setup::{create_app, insert_flow_maps};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ViewerArgs::parse();

    // Plugins first so loader messages reach the log subscriber.
    let mut app = create_app(&args);

    let sequence = FlowMapSequence::load(&args.dirs, args.dtype).inspect_err(|e| {
        error!("{e}");
    })?;
    insert_flow_maps(&mut app, sequence);

    app.run();
    Ok(())
}
