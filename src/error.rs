use thiserror::Error;

/// Errors raised by the NMS core.
#[derive(Debug, Error)]
pub enum LanmsError {
    /// A candidate row or array does not carry 8 coordinates plus a score.
    #[error("Invalid candidate shape: expected {expected} values per box, got {actual}")]
    InvalidShape {
        expected: usize,
        actual: usize,
    },
    /// Both boxes handed to the weighted merge have a combined score of zero (or less).
    #[error("Cannot merge boxes with combined score {0}")]
    ZeroWeightMerge(f32),
    /// IoU threshold outside [0, 1] or NaN.
    #[error("Invalid IoU threshold: {0}")]
    InvalidThreshold(f32),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
