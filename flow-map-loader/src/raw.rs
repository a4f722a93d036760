/// Raw binary flow map decoding.
///
/// A raw file is a flat array of `3 * N` scalars of a single [`PointType`]
/// (x0 y0 z0 x1 y1 z1 ...) in native byte order with no header. Bytes past the
/// last whole point are ignored.
use crate::error::{LoadError, Result};
use crate::flow_map::FlowMap;
use crate::point_type::PointType;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a raw point file and convert every coordinate to `f32`.
/// The returned flow map has `time` 0; callers assign the timestep.
pub fn load_points_from_raw(path: &Path, point_type: PointType) -> Result<FlowMap> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let trailing = bytes.len() % point_type.point_stride();
    if trailing != 0 {
        warn!(
            "{}: ignoring {} trailing bytes that do not form a whole {} point",
            path.display(),
            trailing,
            point_type
        );
    }

    let points = decode_points(&bytes, point_type);
    debug!(
        "{}: {} bytes -> {} points",
        path.display(),
        bytes.len(),
        points.len()
    );

    Ok(FlowMap {
        time: 0,
        points,
        source: path.to_path_buf(),
    })
}

/// Decode whole xyz triples from `bytes`.
pub fn decode_points(bytes: &[u8], point_type: PointType) -> Vec<[f32; 3]> {
    let width = point_type.byte_width();
    bytes
        .chunks_exact(point_type.point_stride())
        .map(|point| {
            let mut xyz = [0.0f32; 3];
            for (axis, component) in point.chunks_exact(width).enumerate() {
                xyz[axis] = decode_component(component, point_type);
            }
            xyz
        })
        .collect()
}

fn decode_component(bytes: &[u8], point_type: PointType) -> f32 {
    match point_type {
        PointType::Uint8 => bytes[0] as f32,
        PointType::Uint16 => bytemuck::pod_read_unaligned::<u16>(bytes) as f32,
        PointType::Float32 => bytemuck::pod_read_unaligned::<f32>(bytes),
        PointType::Float64 => bytemuck::pod_read_unaligned::<f64>(bytes) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ne_bytes<T: bytemuck::Pod>(values: &[T]) -> Vec<u8> {
        bytemuck::cast_slice(values).to_vec()
    }

    #[test]
    fn decodes_uint8_by_value() {
        let points = decode_points(&[1, 2, 3, 250, 251, 255], PointType::Uint8);
        assert_eq!(points, vec![[1.0, 2.0, 3.0], [250.0, 251.0, 255.0]]);
    }

    #[test]
    fn decodes_uint16_native_order() {
        let bytes = ne_bytes(&[0u16, 1, 65535]);
        assert_eq!(decode_points(&bytes, PointType::Uint16), vec![[0.0, 1.0, 65535.0]]);
    }

    #[test]
    fn decodes_float32_exactly() {
        let bytes = ne_bytes(&[0.25f32, -1.5, 10.0, 2.0, 1.0, 10.0]);
        assert_eq!(
            decode_points(&bytes, PointType::Float32),
            vec![[0.25, -1.5, 10.0], [2.0, 1.0, 10.0]]
        );
    }

    #[test]
    fn narrows_float64() {
        let bytes = ne_bytes(&[0.1f64, 1e10, -3.0]);
        let points = decode_points(&bytes, PointType::Float64);
        assert_eq!(points, vec![[0.1f64 as f32, 1e10f64 as f32, -3.0]]);
    }

    #[test]
    fn ignores_partial_trailing_point() {
        let mut bytes = ne_bytes(&[1.0f32, 2.0, 3.0]);
        bytes.extend_from_slice(&ne_bytes(&[4.0f32, 5.0]));
        assert_eq!(decode_points(&bytes, PointType::Float32), vec![[1.0, 2.0, 3.0]]);
        assert!(decode_points(&bytes[..11], PointType::Float32).is_empty());
    }

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&ne_bytes(&[7u16, 8, 9, 10, 11, 12])).unwrap();

        let flow_map = load_points_from_raw(file.path(), PointType::Uint16).unwrap();
        assert_eq!(flow_map.time, 0);
        assert_eq!(flow_map.points, vec![[7.0, 8.0, 9.0], [10.0, 11.0, 12.0]]);
        assert_eq!(flow_map.source, file.path());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow_map_0001.raw");
        let err = load_points_from_raw(&path, PointType::Float32).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("flow_map_0001.raw"));
    }
}
