mod overlap;
mod quad_polygon;

pub use overlap::polygon_iou;
pub use quad_polygon::*;
