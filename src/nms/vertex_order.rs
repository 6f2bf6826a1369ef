use crate::common::QuadBox;

/// Re-orders the corners of `incoming` to line up with `reference`.
///
/// Detectors may start a quad at a different corner or walk it in the other
/// direction. Every rotation in both directions is tried and the one with the
/// smallest total squared corner distance wins; ties keep the earlier ordering,
/// so an already-aligned quad comes back unchanged. The score is untouched.
pub fn align_vertices(reference: &QuadBox, incoming: &QuadBox) -> QuadBox {
    let r = reference.points();
    let p = incoming.points();

    let mut best = p;
    let mut best_d = f64::INFINITY;
    for reversed in [false, true] {
        for start in 0usize..4 {
            let candidate: [(f32, f32); 4] = [0usize, 1, 2, 3].map(|k| {
                if reversed {
                    p[(start + 4 - k) % 4]
                } else {
                    p[(start + k) % 4]
                }
            });
            let d = sq_distance(&r, &candidate);
            if d < best_d {
                best_d = d;
                best = candidate;
            }
        }
    }

    let mut coords = [0f32; 8];
    for (k, (x, y)) in best.iter().enumerate() {
        coords[2 * k] = *x;
        coords[2 * k + 1] = *y;
    }
    incoming.with_coords(coords)
}

fn sq_distance(a: &[(f32, f32); 4], b: &[(f32, f32); 4]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(a, b)| {
            let dx = a.0 as f64 - b.0 as f64;
            let dy = a.1 as f64 - b.1 as f64;
            dx * dx + dy * dy
        })
        .sum()
}
