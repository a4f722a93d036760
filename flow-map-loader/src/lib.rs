//! Loading of time-varying flow map point sets from raw binary files.
//!
//! A flow map dataset is one or more directories of `.raw` files, one file per
//! timestep. Each file is a headerless array of xyz triples of a single scalar
//! type; the timestep is encoded in the file name.

pub mod bounds;
pub mod error;
pub mod flow_map;
pub mod point_type;
pub mod raw;
pub mod sequence;
pub mod summary;

pub use bounds::FlowMapBounds;
pub use error::{LoadError, Result};
pub use flow_map::FlowMap;
pub use point_type::PointType;
pub use raw::{decode_points, load_points_from_raw};
pub use sequence::{FlowMapSequence, collect_raw_files, file_extension, parse_timestep};
pub use summary::SequenceSummary;
