use crate::common::QuadBox;
use crate::error::LanmsError;
use crate::geometry::polygon_iou;
use crate::nms::{align_vertices, should_merge, standard_nms, weighted_merge};

/// Single scan that folds each box into its scan-order predecessor when they overlap.
///
/// Only neighbours in input order are ever merged; overlapping boxes that are
/// not adjacent are left for [`standard_nms`].
///
/// # Arguments
///
/// * `boxes` - Candidates in detector (row-major) order.
/// * `iou_threshold` - Inclusive IoU threshold for merging.
/// * `match_vertex_order` - Re-order incoming corners to the accumulator before averaging.
pub fn merge_adjacent(boxes: &[QuadBox], iou_threshold: f32, match_vertex_order: bool) -> Result<Vec<QuadBox>, LanmsError> {
    let mut candidates = Vec::new();
    let mut current: Option<QuadBox> = None;

    for incoming in boxes {
        current = Some(match current {
            Some(acc) if should_merge(polygon_iou(&acc, incoming), iou_threshold) => {
                if match_vertex_order {
                    weighted_merge(&acc, &align_vertices(&acc, incoming))?
                } else {
                    weighted_merge(&acc, incoming)?
                }
            }
            Some(acc) => {
                candidates.push(acc);
                *incoming
            }
            None => *incoming,
        });
    }

    if let Some(acc) = current {
        candidates.push(acc);
    }
    Ok(candidates)
}

/// Locality-aware NMS: [`merge_adjacent`] followed by [`standard_nms`] with the same threshold.
pub fn locality_aware_nms(boxes: &[QuadBox], iou_threshold: f32, match_vertex_order: bool) -> Result<Vec<QuadBox>, LanmsError> {
    let candidates = merge_adjacent(boxes, iou_threshold, match_vertex_order)?;
    if candidates.is_empty() {
        return Ok(candidates);
    }
    log::debug!("Merge pass reduced {} candidates to {}", boxes.len(), candidates.len());
    Ok(standard_nms(&candidates, iou_threshold))
}
