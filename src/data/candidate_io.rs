//! JSON files for candidate sets and post-processing results.
//!
//! Candidate files hold an array of 9-value rows, `[[x0, y0, ..., y3, score], ...]`.
use std::path::Path;
use ndarray::Array2;
use crate::common::{LanmsResult, QuadBox};
use crate::nms::quads_to_array;

/// Parses a JSON candidate list into an `(N, 9)` array.
pub fn candidates_from_json_str(raw: &str) -> anyhow::Result<Array2<f32>> {
    let rows: Vec<Vec<f32>> = serde_json::from_str(raw)?;
    let quads = rows
        .iter()
        .map(|row| QuadBox::from_row(row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quads_to_array(&quads)?)
}

pub fn read_candidates_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Array2<f32>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read candidates {}: {}", path.display(), e))?;
    candidates_from_json_str(&raw)
}

pub fn write_result_json<P: AsRef<Path>>(path: P, result: &LanmsResult) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(result)?)?;
    log::debug!("Wrote {} text lines to {}", result.len(), path.display());
    Ok(())
}
