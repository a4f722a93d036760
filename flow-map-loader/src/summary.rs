/// Per-timestep statistics for a loaded sequence, written as JSON metadata.
use crate::bounds::FlowMapBounds;
use crate::error::{LoadError, Result};
use crate::point_type::PointType;
use crate::sequence::FlowMapSequence;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct TimestepSummary {
    pub index: usize,
    pub time: i64,
    pub point_count: usize,
    pub bounds: Option<FlowMapBounds>,
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct SequenceSummary {
    pub point_type: PointType,
    pub timestep_count: usize,
    pub total_points: usize,
    pub max_points: usize,
    pub bounds: Option<FlowMapBounds>,
    pub timesteps: Vec<TimestepSummary>,
}

impl SequenceSummary {
    pub fn new(sequence: &FlowMapSequence, point_type: PointType) -> Self {
        let timesteps = sequence
            .iter()
            .enumerate()
            .map(|(index, map)| TimestepSummary {
                index,
                time: map.time,
                point_count: map.len(),
                bounds: non_empty(map.bounds()),
                file: map.source.clone(),
            })
            .collect();

        Self {
            point_type,
            timestep_count: sequence.len(),
            total_points: sequence.total_points(),
            max_points: sequence.max_points(),
            bounds: non_empty(*sequence.bounds()),
            timesteps,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let to_error = |source: Box<dyn std::error::Error + Send + Sync>| LoadError::Summary {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(|e| to_error(e.into()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|e| to_error(e.into()))
    }
}

fn non_empty(bounds: FlowMapBounds) -> Option<FlowMapBounds> {
    (!bounds.is_empty()).then_some(bounds)
}
