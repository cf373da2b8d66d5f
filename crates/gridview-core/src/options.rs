//! Configuration options for gridview.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for loading and building a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Options {
    /// Color lookup table configuration.
    pub lut: LutOptions,

    /// Cell outline configuration.
    pub wireframe: WireframeOptions,
}

impl Options {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scalar-to-color mapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LutOptions {
    /// Name of the palette (e.g. "rainbow").
    pub color_map: String,

    /// Number of steps the palette is sampled at.
    pub resolution: usize,

    /// Lower bound of the scalar domain.
    pub min: f32,

    /// Upper bound of the scalar domain.
    pub max: f32,
}

impl Default for LutOptions {
    fn default() -> Self {
        Self {
            color_map: "rainbow".to_string(),
            resolution: 512,
            min: 0.0,
            max: 4.0,
        }
    }
}

/// Cell outline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeOptions {
    /// Edges whose adjacent faces meet at a smaller angle (degrees) are hidden.
    pub threshold_angle_deg: f32,

    /// Outline color.
    pub color: Vec3,

    /// Outline opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
}

impl Default for WireframeOptions {
    fn default() -> Self {
        Self {
            threshold_angle_deg: 10.0,
            color: Vec3::ZERO,
            opacity: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.lut.color_map, "rainbow");
        assert_eq!(options.lut.resolution, 512);
        assert_eq!((options.lut.min, options.lut.max), (0.0, 4.0));
        assert_eq!(options.wireframe.threshold_angle_deg, 10.0);
    }

    #[test]
    fn test_partial_json() {
        let options =
            Options::from_json_str(r#"{ "lut": { "color_map": "grayscale", "max": 10.0 } }"#)
                .unwrap();
        assert_eq!(options.lut.color_map, "grayscale");
        assert_eq!(options.lut.max, 10.0);
        assert_eq!(options.lut.resolution, 512);
        assert_eq!(options.wireframe, WireframeOptions::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.wireframe.opacity = 0.25;
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Options::from_json_str("{ not json").is_err());
    }
}
