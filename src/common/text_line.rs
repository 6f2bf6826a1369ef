use serde::{Deserialize, Serialize};
use crate::common::QuadBox;

/// One detected text line in the JSON shape returned to clients.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub score: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub x3: f32,
    pub y3: f32,
}

impl From<&QuadBox> for TextLine {
    fn from(quad: &QuadBox) -> Self {
        let c = &quad.coords;
        Self {
            score: quad.score,
            x0: c[0],
            y0: c[1],
            x1: c[2],
            y1: c[3],
            x2: c[4],
            y2: c[5],
            x3: c[6],
            y3: c[7],
        }
    }
}

impl From<&TextLine> for QuadBox {
    fn from(line: &TextLine) -> Self {
        QuadBox::new(
            [line.x0, line.y0, line.x1, line.y1, line.x2, line.y2, line.x3, line.y3],
            line.score,
        )
    }
}
