mod lanms_result;
mod nms_config;
mod quad_box;
mod text_line;

pub use lanms_result::*;
pub use nms_config::*;
pub use quad_box::*;
pub use text_line::*;
