mod error;
mod utils;
pub mod common;
pub mod data;
pub mod geometry;
pub mod nms;

use std::time::Instant;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use crate::common::{LanmsResult, NmsConfig, QuadBox, StageTiming, TextLine};
use crate::nms::{merge_adjacent, quads_from_array, quads_to_array, standard_nms};

pub use error::LanmsError;

pub type Result<T, E = LanmsError> = std::result::Result<T, E>;

/// Standard NMS over an `(N, 9)` candidate array.
pub fn run_standard_nms(candidates: ArrayView2<f32>, iou_threshold: f32) -> Result<Array2<f32>> {
    let quads = quads_from_array(candidates)?;
    quads_to_array(&standard_nms(&quads, iou_threshold))
}

/// Locality-aware NMS over an `(N, 9)` candidate array in detector order.
pub fn run_locality_aware_nms(candidates: ArrayView2<f32>, iou_threshold: f32) -> Result<Array2<f32>> {
    let quads = quads_from_array(candidates)?;
    quads_to_array(&nms::locality_aware_nms(&quads, iou_threshold, false)?)
}

/// Full post-processing run driven by `config`, with per-stage timing.
pub fn run_lanms(candidates: ArrayView2<f32>, config: &NmsConfig) -> Result<LanmsResult> {
    let (kept, timing) = lanms_quads(candidates, config)?;
    let text_lines = kept.iter().map(TextLine::from).collect();
    Ok(LanmsResult::new(text_lines, timing))
}

/// Runs [`run_lanms`] over independent candidate sets in parallel.
///
/// Results are returned in input order; a failing set does not affect the others.
pub fn run_lanms_batch(sets: &[Array2<f32>], config: &NmsConfig) -> Vec<Result<Array2<f32>>> {
    sets.par_iter()
        .map(|set| {
            let (kept, _) = lanms_quads(set.view(), config)?;
            quads_to_array(&kept)
        })
        .collect()
}

fn lanms_quads(candidates: ArrayView2<f32>, config: &NmsConfig) -> Result<(Vec<QuadBox>, StageTiming)> {
    config.validate()?;
    let start = Instant::now();
    let mut elapsed = start.elapsed();

    let mut quads = quads_from_array(candidates)?;
    let mut timing = StageTiming {
        candidates_in: quads.len(),
        ..Default::default()
    };
    if let Some(min_score) = config.min_score {
        quads.retain(|q| q.score >= min_score);
    }

    let merged = merge_adjacent(&quads, config.iou_threshold, config.match_vertex_order)?;
    let now = utils::trace("LANMS", "Merge pass", start, elapsed);
    timing.merge_pass = (now - elapsed).as_secs_f64();
    timing.candidates_merged = merged.len();
    elapsed = now;

    let kept = if merged.is_empty() {
        merged
    } else {
        standard_nms(&merged, config.iou_threshold)
    };
    let now = utils::trace("LANMS", "Suppression", start, elapsed);
    timing.suppression = (now - elapsed).as_secs_f64();
    timing.candidates_kept = kept.len();

    log::debug!("LANMS kept {} of {} candidates ({} after merge pass)",
        timing.candidates_kept, timing.candidates_in, timing.candidates_merged);

    Ok((kept, timing))
}
