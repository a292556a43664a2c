//! Color map system for rendering elevations.

use std::collections::HashMap;

use glam::Vec3;

/// A color map for mapping normalized elevations to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    ///
    /// Values outside `[0, 1]` clamp to the end stops. An empty map samples
    /// to black.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, t: f32) -> Vec3 {
        let Some((&first, rest)) = self.colors.split_first() else {
            return Vec3::ZERO;
        };
        if rest.is_empty() {
            return first;
        }

        // Scale t into segment space: segment idx spans
        // colors[idx]..colors[idx + 1].
        let scaled = t.clamp(0.0, 1.0) * rest.len() as f32;
        let idx = (scaled as usize).min(rest.len() - 1);
        let lo = if idx == 0 { first } else { rest[idx - 1] };
        lo.lerp(rest[idx], scaled - idx as f32)
    }
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Earth-tone terrain ramp: deep water through lowland green and
        // exposed rock up to snow.
        self.register(ColorMap::new(
            "terrain",
            vec![
                Vec3::new(0.153, 0.227, 0.373),
                Vec3::new(0.216, 0.396, 0.537),
                Vec3::new(0.294, 0.561, 0.486),
                Vec3::new(0.420, 0.647, 0.345),
                Vec3::new(0.627, 0.678, 0.322),
                Vec3::new(0.741, 0.635, 0.420),
                Vec3::new(0.694, 0.537, 0.420),
                Vec3::new(0.757, 0.678, 0.624),
                Vec3::new(0.918, 0.902, 0.890),
                Vec3::new(1.000, 1.000, 1.000),
            ],
        ));

        // Viridis color map
        self.register(ColorMap::new(
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

        // Grayscale color map
        self.register(ColorMap::new(
            "grayscale",
            vec![Vec3::ZERO, Vec3::ONE],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Returns all color map names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}
