use serde::{Deserialize, Serialize};
use crate::error::LanmsError;
use crate::geometry::QuadPolygon;

/// Number of values describing one candidate: 4 corners (x, y) followed by the score.
pub const QUAD_VALUES: usize = 9;

/// Quadrilateral text candidate as produced by the detector.
///
/// Corners are stored in the order the network emitted them,
/// `[x0, y0, x1, y1, x2, y2, x3, y3]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct QuadBox {
    pub coords: [f32; 8],
    pub score: f32,
}

impl QuadBox {
    pub fn new(coords: [f32; 8], score: f32) -> Self {
        Self { coords, score }
    }

    /// Builds a box from a row of exactly 9 values (8 coordinates then the score).
    ///
    /// # Arguments
    ///
    /// * `row` - The raw candidate values.
    ///
    /// # Returns
    ///
    /// A `QuadBox`, or `LanmsError::InvalidShape` when the row length is not 9.
    pub fn from_row(row: &[f32]) -> Result<Self, LanmsError> {
        if row.len() != QUAD_VALUES {
            return Err(LanmsError::InvalidShape {
                expected: QUAD_VALUES,
                actual: row.len(),
            });
        }
        let mut coords = [0f32; 8];
        coords.copy_from_slice(&row[..8]);
        Ok(Self::new(coords, row[8]))
    }

    /// Returns the box as `[x0, y0, x1, y1, x2, y2, x3, y3, score]`.
    pub fn to_row(&self) -> [f32; QUAD_VALUES] {
        let mut row = [0f32; QUAD_VALUES];
        row[..8].copy_from_slice(&self.coords);
        row[8] = self.score;
        row
    }

    /// Returns the four corners as `(x, y)` pairs.
    pub fn points(&self) -> [(f32, f32); 4] {
        let c = &self.coords;
        [(c[0], c[1]), (c[2], c[3]), (c[4], c[5]), (c[6], c[7])]
    }

    /// Returns the minimum x-coordinate over all corners.
    pub fn x_min(&self) -> f32 {
        self.points().iter().map(|p| p.0).fold(f32::INFINITY, f32::min)
    }

    /// Returns the minimum y-coordinate over all corners.
    pub fn y_min(&self) -> f32 {
        self.points().iter().map(|p| p.1).fold(f32::INFINITY, f32::min)
    }

    /// Returns the maximum x-coordinate over all corners.
    pub fn x_max(&self) -> f32 {
        self.points().iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max)
    }

    /// Returns the maximum y-coordinate over all corners.
    pub fn y_max(&self) -> f32 {
        self.points().iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max)
    }

    /// The corners interpreted as a simple polygon.
    pub fn polygon(&self) -> QuadPolygon {
        QuadPolygon::new(self.coords)
    }

    pub fn with_coords(mut self, coords: [f32; 8]) -> Self {
        self.coords = coords;
        self
    }
}
