use serde::{Deserialize, Serialize};
use crate::common::TextLine;

/// Wall-clock seconds and box counts for each post-processing stage.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    pub merge_pass: f64,
    pub suppression: f64,
    pub candidates_in: usize,
    pub candidates_merged: usize,
    pub candidates_kept: usize,
}

/// Output of [`crate::run_lanms`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanmsResult {
    pub text_lines: Vec<TextLine>,
    pub timing: StageTiming,
}

impl LanmsResult {
    pub fn new(text_lines: Vec<TextLine>, timing: StageTiming) -> Self {
        Self { text_lines, timing }
    }

    pub fn len(&self) -> usize {
        self.text_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_lines.is_empty()
    }
}
