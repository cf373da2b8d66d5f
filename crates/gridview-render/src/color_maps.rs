//! Color map system and scalar lookup tables.

use std::collections::HashMap;

use glam::Vec3;
use gridview_core::{GridError, LutOptions, Result};

/// A color map for mapping normalized values to colors.
///
/// Colors are given as stops: a position in `[0, 1]` and the color at that
/// position. Positions must be ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color stops, ascending by position.
    pub stops: Vec<(f32, Vec3)>,
}

impl ColorMap {
    /// Creates a new color map from stops.
    pub fn new(name: impl Into<String>, stops: Vec<(f32, Vec3)>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Creates a color map whose colors are evenly spaced from 0 to 1.
    pub fn evenly_spaced(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        let n = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as f32 / n, c))
            .collect();
        Self::new(name, stops)
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        let (Some(&(first_pos, first)), Some(&(last_pos, last))) =
            (self.stops.first(), self.stops.last())
        else {
            return Vec3::ZERO;
        };

        if t <= first_pos {
            return first;
        }
        if t >= last_pos {
            return last;
        }

        for pair in self.stops.windows(2) {
            let (lo_pos, lo) = pair[0];
            let (hi_pos, hi) = pair[1];
            if t >= lo_pos && t < hi_pos {
                let span = hi_pos - lo_pos;
                if span <= 0.0 {
                    return hi;
                }
                return lo.lerp(hi, (t - lo_pos) / span);
            }
        }

        last
    }
}

/// Converts a `0xRRGGBB` literal to a color.
fn hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    )
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Lookup-table palettes
        self.register(ColorMap::new(
            "rainbow",
            vec![
                (0.0, hex(0x0000FF)),
                (0.2, hex(0x00FFFF)),
                (0.5, hex(0x00FF00)),
                (0.8, hex(0xFFFF00)),
                (1.0, hex(0xFF0000)),
            ],
        ));

        self.register(ColorMap::new(
            "cooltowarm",
            vec![
                (0.0, hex(0x3C4EC2)),
                (0.2, hex(0x9BBCFF)),
                (0.5, hex(0xDCDCDC)),
                (0.8, hex(0xF6A385)),
                (1.0, hex(0xB40426)),
            ],
        ));

        self.register(ColorMap::new(
            "blackbody",
            vec![
                (0.0, hex(0x000000)),
                (0.2, hex(0x780000)),
                (0.5, hex(0xE63200)),
                (0.8, hex(0xFFFF00)),
                (1.0, hex(0xFFFFFF)),
            ],
        ));

        self.register(ColorMap::new(
            "grayscale",
            vec![
                (0.0, hex(0x000000)),
                (0.2, hex(0x404040)),
                (0.5, hex(0x7F7F80)),
                (0.8, hex(0xBFBFBF)),
                (1.0, hex(0xFFFFFF)),
            ],
        ));

        // Viridis color map
        self.register(ColorMap::evenly_spaced(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        self.register(ColorMap::evenly_spaced(
            "blues",
            vec![
                Vec3::new(0.969, 0.984, 1.000),
                Vec3::new(0.871, 0.922, 0.969),
                Vec3::new(0.776, 0.859, 0.937),
                Vec3::new(0.620, 0.792, 0.882),
                Vec3::new(0.419, 0.682, 0.839),
                Vec3::new(0.259, 0.573, 0.776),
                Vec3::new(0.129, 0.443, 0.710),
                Vec3::new(0.031, 0.318, 0.612),
                Vec3::new(0.031, 0.188, 0.420),
            ],
        ));

        self.register(ColorMap::evenly_spaced(
            "reds",
            vec![
                Vec3::new(1.000, 0.961, 0.941),
                Vec3::new(0.996, 0.878, 0.824),
                Vec3::new(0.988, 0.733, 0.631),
                Vec3::new(0.988, 0.573, 0.447),
                Vec3::new(0.984, 0.416, 0.290),
                Vec3::new(0.937, 0.231, 0.173),
                Vec3::new(0.796, 0.094, 0.114),
                Vec3::new(0.647, 0.059, 0.082),
                Vec3::new(0.404, 0.000, 0.051),
            ],
        ));

        self.register(ColorMap::evenly_spaced(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));
    }

    /// Registers a color map, replacing any map with the same name.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Returns all color map names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}

/// A color map sampled at a fixed resolution over a scalar domain.
///
/// Values are clamped into `[min, max]`, normalized, and snapped to the
/// nearest of the `resolution + 1` precomputed samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLookupTable {
    name: String,
    min: f32,
    max: f32,
    samples: Vec<Vec3>,
}

/// Largest number of steps a lookup table may be sampled at.
pub const MAX_LUT_RESOLUTION: usize = 1 << 20;

impl ColorLookupTable {
    /// Samples `color_map` at `resolution` steps over `[min, max]`.
    ///
    /// `resolution` must lie in `1..=MAX_LUT_RESOLUTION`.
    pub fn new(color_map: &ColorMap, resolution: usize, min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GridError::InvalidLookupTable(format!(
                "domain bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(GridError::InvalidLookupTable(format!(
                "domain minimum {min} must be below maximum {max}"
            )));
        }
        if resolution == 0 {
            return Err(GridError::InvalidLookupTable(
                "resolution must be at least 1".to_string(),
            ));
        }
        if resolution > MAX_LUT_RESOLUTION {
            return Err(GridError::InvalidLookupTable(format!(
                "resolution {resolution} exceeds the maximum of {MAX_LUT_RESOLUTION}"
            )));
        }

        let samples = (0..=resolution)
            .map(|k| color_map.sample(k as f32 / resolution as f32))
            .collect();
        log::debug!(
            "sampled color map '{}' at {resolution} steps over [{min}, {max}]",
            color_map.name
        );

        Ok(Self {
            name: color_map.name.clone(),
            min,
            max,
            samples,
        })
    }

    /// Builds a table from a named palette in `registry`.
    pub fn from_registry(
        registry: &ColorMapRegistry,
        name: &str,
        resolution: usize,
        min: f32,
        max: f32,
    ) -> Result<Self> {
        let color_map = registry
            .get(name)
            .ok_or_else(|| GridError::UnknownColorMap(name.to_string()))?;
        Self::new(color_map, resolution, min, max)
    }

    /// Builds a table from options, using the default palettes.
    pub fn from_options(options: &LutOptions) -> Result<Self> {
        Self::from_registry(
            &ColorMapRegistry::new(),
            &options.color_map,
            options.resolution,
            options.min,
            options.max,
        )
    }

    /// Returns the palette name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scalar domain.
    pub fn domain(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Returns the number of steps the palette was sampled at.
    pub fn resolution(&self) -> usize {
        self.samples.len() - 1
    }

    /// Returns the sample nearest to normalized position `t` in `[0, 1]`.
    pub fn sample_at(&self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = (t * self.resolution() as f32).round() as usize;
        self.samples[idx.min(self.resolution())]
    }

    /// Maps a scalar value to its color.
    pub fn color(&self, value: f32) -> Vec3 {
        if value.is_nan() {
            return self.samples[0];
        }
        let value = value.clamp(self.min, self.max);
        self.sample_at((value - self.min) / (self.max - self.min))
    }
}
