use crate::nms::{should_merge, Nms};

/// Greedy confidence-ordered suppression.
///
/// Boxes are visited by descending confidence; equal confidences keep their
/// input order. Each kept box discards every lower-priority box whose overlap
/// with it reaches `iou_threshold`.
///
/// # Arguments
///
/// * `boxes` - Candidates in any order.
/// * `iou_threshold` - Inclusive IoU threshold.
///
/// # Returns
///
/// The surviving boxes, highest confidence first.
pub fn standard_nms<T: Nms + Clone>(boxes: &[T], iou_threshold: f32) -> Vec<T> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    // stable, so ties keep the earlier index first
    order.sort_by(|&a, &b| boxes[b].confidence().total_cmp(&boxes[a].confidence()));

    let mut keep = Vec::new();
    while let Some((&first, rest)) = order.split_first() {
        keep.push(first);
        order = rest
            .iter()
            .copied()
            .filter(|&j| !should_merge(boxes[first].iou(&boxes[j]), iou_threshold))
            .collect();
    }

    keep.into_iter().map(|i| boxes[i].clone()).collect()
}
