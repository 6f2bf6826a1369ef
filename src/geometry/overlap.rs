use std::cmp::Ordering;
use crate::common::QuadBox;
use crate::geometry::SimplePolygon;

/// Intersection over union of two candidate quadrilaterals.
///
/// Invalid polygons (self-intersecting, zero-area, non-finite corners) and an
/// empty union both yield `0.0`. The result always lies in `[0, 1]`.
///
/// # Arguments
///
/// * `g` - First candidate.
/// * `p` - Second candidate.
///
/// # Returns
///
/// The IoU ratio, identical for `(g, p)` and `(p, g)`.
pub fn polygon_iou(g: &QuadBox, p: &QuadBox) -> f32 {
    // fixed operand order keeps the clipper output symmetric
    let (g, p) = match g.coords.partial_cmp(&p.coords) {
        Some(Ordering::Greater) => (p, g),
        _ => (g, p),
    };

    let (g, p) = (g.polygon(), p.polygon());
    if !g.is_valid() || !p.is_valid() {
        return 0.0;
    }

    let inter = g.intersect_area(&p);
    let union = g.area() + p.area() - inter;
    if union <= 0.0 {
        return 0.0;
    }
    (inter / union).clamp(0.0, 1.0) as f32
}
