use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::LanmsError;

/// Caller-side options for a post-processing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NmsConfig {
    pub iou_threshold: f32,
    /// Candidates scoring below this are dropped before the merge pass.
    pub min_score: Option<f32>,
    /// Re-order incoming vertices to best match the accumulator before merging.
    pub match_vertex_order: bool,
}

impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.2,
            min_score: None,
            match_vertex_order: false,
        }
    }
}

impl NmsConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads a config from a JSON file. Missing fields fall back to the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: NmsConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_iou_threshold(mut self, x: f32) -> Self {
        self.iou_threshold = x;
        self
    }

    pub fn with_min_score(mut self, x: f32) -> Self {
        self.min_score = Some(x);
        self
    }

    pub fn with_match_vertex_order(mut self, x: bool) -> Self {
        self.match_vertex_order = x;
        self
    }

    pub fn validate(&self) -> Result<(), LanmsError> {
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(LanmsError::InvalidThreshold(self.iou_threshold));
        }
        Ok(())
    }

    pub fn to_string(&self) -> String {
        format!("IoU Threshold: {}\n\
        Minimum Score: {}\n\
        Match Vertex Order: {}",
                self.iou_threshold,
                self.min_score.map_or("none".to_string(), |s| s.to_string()),
                self.match_vertex_order)
    }
}
