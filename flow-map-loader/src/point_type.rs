/// Scalar type of the coordinates stored in a raw flow map file
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Uint8,
    Uint16,
    #[default]
    Float32,
    Float64,
}

impl PointType {
    pub const ALL: [PointType; 4] = [
        PointType::Uint8,
        PointType::Uint16,
        PointType::Float32,
        PointType::Float64,
    ];

    /// Size in bytes of a single coordinate component.
    pub fn byte_width(self) -> usize {
        match self {
            Self::Uint8 => 1,
            Self::Uint16 => 2,
            Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Size in bytes of one xyz point.
    pub fn point_stride(self) -> usize {
        self.byte_width() * 3
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl FromStr for PointType {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uint8" => Ok(Self::Uint8),
            "uint16" => Ok(Self::Uint16),
            "float32" => Ok(Self::Float32),
            "float64" => Ok(Self::Float64),
            _ => Err(LoadError::UnrecognizedPointType(s.to_string())),
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
