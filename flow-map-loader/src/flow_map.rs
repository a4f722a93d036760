use crate::bounds::FlowMapBounds;
use serde::Serialize;
use std::path::PathBuf;

/// One timestep's set of 3D point coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowMap {
    pub time: i64,
    pub points: Vec<[f32; 3]>,
    /// File the points were read from; empty for in-memory flow maps.
    #[serde(skip)]
    pub source: PathBuf,
}

impl FlowMap {
    pub fn new(time: i64, points: Vec<[f32; 3]>) -> Self {
        Self {
            time,
            points,
            source: PathBuf::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> FlowMapBounds {
        FlowMapBounds::from_points(&self.points)
    }
}
