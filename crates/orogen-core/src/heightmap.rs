//! Square elevation grid produced by the terrain generator.

use serde::{Deserialize, Serialize};

/// A square grid of elevation values, stored row-major.
///
/// Produced by [`DiamondSquare::generate`](crate::DiamondSquare::generate);
/// consumed by downstream renderers or exporters that map elevation to a
/// surface height and a color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heightmap {
    side: usize,
    data: Vec<f32>,
}

impl Heightmap {
    /// Creates a zero-filled heightmap with the given side length.
    #[must_use]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            data: vec![0.0; side * side],
        }
    }

    /// Side length of the grid (number of cells along one axis).
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elevation at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside `[0, side)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.side && col < self.side, "cell ({row}, {col}) out of bounds");
        self.data[row * self.side + col]
    }

    /// Sets the elevation at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside `[0, side)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.side && col < self.side, "cell ({row}, {col}) out of bounds");
        self.data[row * self.side + col] = value;
    }

    /// All elevations in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The four corner elevations, in order
    /// top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [f32; 4] {
        let last = self.side - 1;
        [
            self.get(0, 0),
            self.get(0, last),
            self.get(last, 0),
            self.get(last, last),
        ]
    }

    /// Minimum and maximum elevation over the whole grid.
    ///
    /// Returns `(0.0, 0.0)` for an empty grid.
    #[must_use]
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    /// Maps an elevation into `[0, 1]` relative to the grid's min/max range.
    ///
    /// A flat grid (min == max) maps everything to 0.5.
    #[must_use]
    pub fn normalized(&self, value: f32) -> f32 {
        let (min, max) = self.min_max();
        let range = max - min;
        if range <= f32::EPSILON {
            0.5
        } else {
            ((value - min) / range).clamp(0.0, 1.0)
        }
    }
}
