/// Discovery and ordering of the raw files that make up a flow map sequence.
use crate::bounds::FlowMapBounds;
use crate::error::{LoadError, Result};
use crate::flow_map::FlowMap;
use crate::point_type::PointType;
use crate::raw::load_points_from_raw;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extension (without the dot) of flow map files.
pub const RAW_EXTENSION: &str = "raw";

/// Byte offset of the timestep digits in the default `flow_map_NNNN.raw` layout.
pub const TIMESTEP_OFFSET: usize = 9;

/// Substring after the last `.`, or an empty string when there is none.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

/// Recover the timestep encoded in a flow map file name.
///
/// An optionally signed integer starting at [`TIMESTEP_OFFSET`] wins; otherwise
/// the last run of digits in the file stem is used, without a sign.
pub fn parse_timestep(file_name: &str) -> Result<i64> {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
    let digits = stem
        .get(TIMESTEP_OFFSET..)
        .and_then(signed_leading_digits)
        .or_else(|| last_digit_run(stem))
        .ok_or_else(|| LoadError::MissingTimestep(file_name.to_string()))?;
    digits
        .parse()
        .map_err(|_| LoadError::TimestepOutOfRange(file_name.to_string()))
}

fn signed_leading_digits(s: &str) -> Option<&str> {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let sign_len = s.len() - unsigned.len();
    let digit_len = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    (digit_len > 0).then(|| &s[..sign_len + digit_len])
}

fn last_digit_run(s: &str) -> Option<&str> {
    let end = s.rfind(|c: char| c.is_ascii_digit())? + 1;
    let start = s[..end]
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .len();
    Some(&s[start..end])
}

/// List every `.raw` file directly inside each directory.
/// Files within a directory are returned in name order.
pub fn collect_raw_files(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for dir in dirs {
        let entries = fs::read_dir(dir).map_err(|source| LoadError::Directory {
            path: dir.clone(),
            source,
        })?;

        let mut raw_files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::Directory {
                path: dir.clone(),
                source,
            })?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name();
            if file_extension(&name.to_string_lossy()) == RAW_EXTENSION {
                raw_files.push(entry.path());
            }
        }
        raw_files.sort();
        files.extend(raw_files);
    }

    Ok(files)
}

/// Timesteps of a flow map dataset, sorted ascending by time.
#[derive(Debug, Clone, Default)]
pub struct FlowMapSequence {
    maps: Vec<FlowMap>,
    bounds: FlowMapBounds,
}

impl FlowMapSequence {
    /// Load every raw file in `dirs`, assign timesteps from the file names and
    /// sort by time.
    pub fn load(dirs: &[PathBuf], point_type: PointType) -> Result<Self> {
        let files = collect_raw_files(dirs)?;
        if files.is_empty() {
            return Err(LoadError::EmptySequence(dirs.to_vec()));
        }

        // Resolve every timestep before reading anything.
        let timed_files = files
            .into_iter()
            .map(|path| -> Result<(i64, PathBuf)> { Ok((timestep_of(&path)?, path)) })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Loading {} flow maps ({}) from {} directories",
            timed_files.len(),
            point_type,
            dirs.len()
        );

        let pb = ProgressBar::new(timed_files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} flow maps ({percent}%) {msg}")
                .map(|style| style.progress_chars("▉▊▋▌▍▎▏ "))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Reading points");

        let maps = timed_files
            .par_iter()
            .map(|(time, path)| -> Result<FlowMap> {
                let mut flow_map = load_points_from_raw(path, point_type)?;
                flow_map.time = *time;
                pb.inc(1);
                Ok(flow_map)
            })
            .collect::<Result<Vec<_>>>()?;
        pb.finish_with_message("Flow maps loaded");

        let sequence = Self::from_flow_maps(maps);
        if let Some((first, last)) = sequence.time_range() {
            info!(
                "Loaded {} timesteps ({}..={}), {} points total, at most {} per timestep",
                sequence.len(),
                first,
                last,
                sequence.total_points(),
                sequence.max_points()
            );
        }
        Ok(sequence)
    }

    /// Build a sequence from already decoded flow maps.
    pub fn from_flow_maps(mut maps: Vec<FlowMap>) -> Self {
        maps.sort_by_key(|m| m.time);

        let mut bounds = FlowMapBounds::new();
        for map in &maps {
            bounds.merge(&map.bounds());
        }

        Self { maps, bounds }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlowMap> {
        self.maps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowMap> {
        self.maps.iter()
    }

    /// Union bounds of every point in every timestep.
    pub fn bounds(&self) -> &FlowMapBounds {
        &self.bounds
    }

    /// Largest point count of any single timestep.
    pub fn max_points(&self) -> usize {
        self.maps.iter().map(FlowMap::len).max().unwrap_or(0)
    }

    pub fn total_points(&self) -> usize {
        self.maps.iter().map(FlowMap::len).sum()
    }

    /// First and last timestep.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        Some((self.maps.first()?.time, self.maps.last()?.time))
    }
}

fn timestep_of(path: &Path) -> Result<i64> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_timestep(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_raw(dir: &Path, name: &str, values: &[f32]) {
        fs::write(dir.join(name), bytemuck::cast_slice::<f32, u8>(values)).unwrap();
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(file_extension("flow_map_0001.raw"), "raw");
        assert_eq!(file_extension("archive.tar.raw"), "raw");
        assert_eq!(file_extension("flow_map_0001.raw.bak"), "bak");
        assert_eq!(file_extension("README"), "");
    }

    #[test]
    fn timestep_from_default_layout() {
        assert_eq!(parse_timestep("flow_map_0012.raw").unwrap(), 12);
        assert_eq!(parse_timestep("flowmaps_7.raw").unwrap(), 7);
        assert_eq!(parse_timestep("flow_map_100x.raw").unwrap(), 100);
    }

    #[test]
    fn timestep_keeps_its_sign() {
        assert_eq!(parse_timestep("flow_map_-5.raw").unwrap(), -5);
        assert_eq!(parse_timestep("flow_map_+7.raw").unwrap(), 7);
        assert_eq!(parse_timestep("flow_map_-0003.raw").unwrap(), -3);
        // A sign without digits is not a timestep; fall back to the stem.
        assert_eq!(parse_timestep("flow_map_-x3.raw").unwrap(), 3);
    }

    #[test]
    fn timestep_too_large_is_out_of_range() {
        let name = "flow_map_99999999999999999999.raw";
        let err = parse_timestep(name).unwrap_err();
        assert!(matches!(err, LoadError::TimestepOutOfRange(ref n) if n == name));
        assert!(matches!(
            parse_timestep("frame_ab_x99999999999999999999.raw"),
            Err(LoadError::TimestepOutOfRange(_))
        ));
    }

    #[test]
    fn timestep_falls_back_to_last_digit_run() {
        assert_eq!(parse_timestep("t42.raw").unwrap(), 42);
        assert_eq!(parse_timestep("run3_step_out_15.raw").unwrap(), 15);
        assert_eq!(parse_timestep("ñandú_frame_9.raw").unwrap(), 9);
    }

    #[test]
    fn timestep_missing_is_an_error() {
        let err = parse_timestep("flow_map_last.raw").unwrap_err();
        assert!(matches!(err, LoadError::MissingTimestep(ref n) if n == "flow_map_last.raw"));
    }

    #[test]
    fn collects_only_raw_files() {
        let dir = tempfile::tempdir().unwrap();
        write_raw(dir.path(), "flow_map_0002.raw", &[0.0; 3]);
        write_raw(dir.path(), "flow_map_0001.raw", &[0.0; 3]);
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();
        fs::create_dir(dir.path().join("nested.raw")).unwrap();

        let files = collect_raw_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["flow_map_0001.raw", "flow_map_0002.raw"]);
    }

    #[test]
    fn unopenable_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");
        let err = collect_raw_files(&[missing.clone()]).unwrap_err();
        assert!(matches!(err, LoadError::Directory { ref path, .. } if *path == missing));
    }

    #[test]
    fn load_sorts_by_timestep_across_directories() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_raw(first.path(), "flow_map_0010.raw", &[10.0, 0.0, 0.0]);
        write_raw(first.path(), "flow_map_0002.raw", &[2.0, 0.0, 0.0, 2.0, 1.0, 0.0]);
        write_raw(second.path(), "flow_map_0005.raw", &[5.0, -1.0, 3.0]);

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let sequence = FlowMapSequence::load(&dirs, PointType::Float32).unwrap();

        let times: Vec<i64> = sequence.iter().map(|m| m.time).collect();
        assert_eq!(times, vec![2, 5, 10]);
        assert_eq!(sequence.get(0).unwrap().len(), 2);
        assert_eq!(sequence.max_points(), 2);
        assert_eq!(sequence.total_points(), 4);
        assert_eq!(sequence.time_range(), Some((2, 10)));

        let bounds = sequence.bounds();
        assert_eq!((bounds.min_x, bounds.max_x), (2.0, 10.0));
        assert_eq!((bounds.min_y, bounds.max_y), (-1.0, 1.0));
        assert_eq!((bounds.min_z, bounds.max_z), (0.0, 3.0));
    }

    #[test]
    fn negative_timesteps_sort_first() {
        let dir = tempfile::tempdir().unwrap();
        write_raw(dir.path(), "flow_map_0002.raw", &[2.0, 0.0, 0.0]);
        write_raw(dir.path(), "flow_map_-002.raw", &[-2.0, 0.0, 0.0]);

        let sequence = FlowMapSequence::load(&[dir.path().to_path_buf()], PointType::Float32)
            .unwrap();
        let times: Vec<i64> = sequence.iter().map(|m| m.time).collect();
        assert_eq!(times, vec![-2, 2]);
        assert_eq!(sequence.get(0).unwrap().points[0][0], -2.0);
    }

    #[test]
    fn load_without_raw_files_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("flow_map_0001.bin"), [0u8; 12]).unwrap();
        let err = FlowMapSequence::load(&[dir.path().to_path_buf()], PointType::Float32)
            .unwrap_err();
        assert!(matches!(err, LoadError::EmptySequence(_)));
    }

    #[test]
    fn from_flow_maps_keeps_equal_times_in_input_order() {
        let sequence = FlowMapSequence::from_flow_maps(vec![
            FlowMap::new(3, vec![[0.0, 0.0, 0.0]]),
            FlowMap::new(1, vec![[1.0, 0.0, 0.0]]),
            FlowMap::new(3, vec![[2.0, 0.0, 0.0]]),
        ]);
        let first_x: Vec<f32> = sequence.iter().map(|m| m.points[0][0]).collect();
        assert_eq!(first_x, vec![1.0, 0.0, 2.0]);
    }
}
