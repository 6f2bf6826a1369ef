use crate::common::QuadBox;
use crate::error::LanmsError;

/// Merges two candidates into a new box.
///
/// Each coordinate becomes the score-weighted average of the two sources and
/// the score becomes the plain sum, so agreeing detections grow past 1.
///
/// # Arguments
///
/// * `g` - The accumulated box.
/// * `p` - The incoming box.
///
/// # Returns
///
/// The merged box, or `LanmsError::ZeroWeightMerge` when the scores do not sum
/// to a positive value.
pub fn weighted_merge(g: &QuadBox, p: &QuadBox) -> Result<QuadBox, LanmsError> {
    let score = g.score + p.score;
    if score.is_nan() || score <= 0.0 {
        return Err(LanmsError::ZeroWeightMerge(score));
    }

    let (wg, wp) = (g.score as f64, p.score as f64);
    let total = wg + wp;
    let mut coords = [0f32; 8];
    for (i, c) in coords.iter_mut().enumerate() {
        *c = ((wg * g.coords[i] as f64 + wp * p.coords[i] as f64) / total) as f32;
    }

    Ok(QuadBox::new(coords, score))
}
