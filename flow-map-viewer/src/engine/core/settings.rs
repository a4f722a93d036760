use crate::cli::ViewerArgs;
use bevy::prelude::*;
use flow_map_loader::FlowMapSequence;

/// Runtime settings taken from the command line.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub sphere_radius: f32,
    pub dwell_secs: f32,
}

impl From<&ViewerArgs> for ViewerSettings {
    fn from(args: &ViewerArgs) -> Self {
        Self {
            sphere_radius: args.radius,
            dwell_secs: args.dwell,
        }
    }
}

/// Every timestep of the dataset, sorted by time.
#[derive(Resource, Deref, Debug, Clone)]
pub struct FlowMaps(pub FlowMapSequence);
