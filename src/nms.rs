mod locality_aware;
mod standard;
mod vertex_order;
mod weighted_merge;

pub use locality_aware::*;
pub use standard::standard_nms;
pub use vertex_order::align_vertices;
pub use weighted_merge::weighted_merge;

use ndarray::{Array2, ArrayView2};
use crate::common::{QuadBox, QUAD_VALUES};
use crate::error::LanmsError;
use crate::geometry::polygon_iou;

pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

impl Nms for QuadBox {
    /// Computes the polygon intersection over union between this box and another.
    fn iou(&self, other: &Self) -> f32 {
        polygon_iou(self, other)
    }

    /// Returns the confidence score of the box.
    fn confidence(&self) -> f32 {
        self.score
    }
}

/// Whether an overlap is high enough to merge or suppress.
///
/// The comparison is inclusive, but a zero overlap never triggers, so
/// disjoint or invalid boxes survive even at `thres == 0`.
pub fn should_merge(iou: f32, thres: f32) -> bool {
    iou > 0.0 && iou >= thres
}

/// Reads an `(N, 9)` array into boxes. An array with no rows is always accepted.
pub fn quads_from_array(array: ArrayView2<f32>) -> Result<Vec<QuadBox>, LanmsError> {
    if array.nrows() == 0 {
        return Ok(Vec::new());
    }
    if array.ncols() != QUAD_VALUES {
        return Err(LanmsError::InvalidShape {
            expected: QUAD_VALUES,
            actual: array.ncols(),
        });
    }
    array
        .outer_iter()
        .map(|row| QuadBox::from_row(&row.to_vec()))
        .collect()
}

/// Packs boxes back into an `(M, 9)` array.
pub fn quads_to_array(quads: &[QuadBox]) -> Result<Array2<f32>, LanmsError> {
    let flat: Vec<f32> = quads.iter().flat_map(|q| q.to_row()).collect();
    Ok(Array2::from_shape_vec((quads.len(), QUAD_VALUES), flat)?)
}
