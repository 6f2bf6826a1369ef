use geo::algorithm::kernels::{Kernel, Orientation, RobustKernel};
use geo::{Area, BooleanOps, Coord, Intersects, Line, LineString, Polygon};

/// Minimal polygon capability needed by the overlap evaluator.
pub trait SimplePolygon {
    /// Whether the polygon is simple (non-self-intersecting) and has non-zero area.
    fn is_valid(&self) -> bool;

    /// Unsigned area.
    fn area(&self) -> f64;

    /// Area shared with `other`. Zero when either polygon is invalid.
    fn intersect_area(&self, other: &Self) -> f64;
}

/// The four corners of a candidate box as a closed ring.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPolygon {
    vertices: [Coord<f64>; 4],
    valid: bool,
}

impl QuadPolygon {
    pub fn new(coords: [f32; 8]) -> Self {
        let vertices = [0usize, 1, 2, 3].map(|i| Coord {
            x: coords[2 * i] as f64,
            y: coords[2 * i + 1] as f64,
        });
        let valid = is_simple_quad(&vertices);
        Self { vertices, valid }
    }

    /// Positive for counter-clockwise rings in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        to_geo(&self.vertices).signed_area()
    }

    fn to_geo(&self) -> Polygon<f64> {
        to_geo(&self.vertices)
    }
}

impl SimplePolygon for QuadPolygon {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    fn intersect_area(&self, other: &Self) -> f64 {
        // the clipper only sees simple rings
        if !self.valid || !other.valid {
            return 0.0;
        }
        self.to_geo().intersection(&other.to_geo()).unsigned_area()
    }
}

fn to_geo(v: &[Coord<f64>; 4]) -> Polygon<f64> {
    Polygon::new(LineString::from(v.to_vec()), vec![])
}

fn is_simple_quad(v: &[Coord<f64>; 4]) -> bool {
    if v.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return false;
    }

    for i in 0..4 {
        let (a, b, c) = (v[i], v[(i + 1) % 4], v[(i + 2) % 4]);
        if a == b {
            return false;
        }
        // edge b-c doubling back along a-b
        let dot = (b.x - a.x) * (c.x - b.x) + (b.y - a.y) * (c.y - b.y);
        if RobustKernel::orient2d(a, b, c) == Orientation::Collinear && dot < 0.0 {
            return false;
        }
    }

    // closed segments, so touching counts
    if Line::new(v[0], v[1]).intersects(&Line::new(v[2], v[3]))
        || Line::new(v[1], v[2]).intersects(&Line::new(v[3], v[0]))
    {
        return false;
    }

    to_geo(v).signed_area() != 0.0
}
