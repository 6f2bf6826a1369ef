extern crate bvr_lanms;

use std::path::PathBuf;
use ndarray::{array, Array2};
use bvr_lanms::common::{NmsConfig, QuadBox};
use bvr_lanms::data::{candidates_from_json_str, read_candidates_json, write_result_json};
use bvr_lanms::nms::quads_to_array;
use bvr_lanms::{run_lanms, run_lanms_batch, run_locality_aware_nms, run_standard_nms, LanmsError};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quads::random_set;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("bvr_lanms_{}", std::process::id()))
        .join(name)
}

#[test]
fn array_round_trip_through_driver() {
    let candidates = array![
        [0., 0., 1., 0., 1., 1., 0., 1., 0.9],
        [0., 0., 1., 0., 1., 1., 0., 1., 0.8],
    ];
    let kept = run_locality_aware_nms(candidates.view(), 0.3).unwrap();
    assert_eq!(kept.shape(), &[1, 9]);
    assert_eq!(kept[[0, 8]], 0.9f32 + 0.8f32);
    assert_eq!(kept.row(0).to_vec()[..8], [0f32, 0., 1., 0., 1., 1., 0., 1.]);
}

#[test]
fn empty_arrays_stay_empty() {
    let empty = Array2::<f32>::zeros((0, 9));
    assert_eq!(run_locality_aware_nms(empty.view(), 0.2).unwrap().shape(), &[0, 9]);
    assert_eq!(run_standard_nms(empty.view(), 0.2).unwrap().shape(), &[0, 9]);

    let shapeless = Array2::<f32>::zeros((0, 0));
    assert_eq!(run_locality_aware_nms(shapeless.view(), 0.2).unwrap().shape(), &[0, 9]);
}

#[test]
fn wrong_row_width_is_rejected() {
    let candidates = Array2::<f32>::zeros((3, 8));
    assert!(matches!(
        run_locality_aware_nms(candidates.view(), 0.2),
        Err(LanmsError::InvalidShape { expected: 9, actual: 8 })
    ));
}

#[test]
fn standard_nms_on_arrays() {
    let candidates = array![
        [0., 0., 2., 0., 2., 1., 0., 1., 0.4],
        [0.2, 0., 2.2, 0., 2.2, 1., 0.2, 1., 0.9],
        [9., 9., 10., 9., 10., 10., 9., 10., 0.5],
    ];
    let expected: Array2<f32> = array![
        [0.2, 0., 2.2, 0., 2.2, 1., 0.2, 1., 0.9],
        [9., 9., 10., 9., 10., 10., 9., 10., 0.5],
    ];
    assert_eq!(run_standard_nms(candidates.view(), 0.3).unwrap(), expected);
}

#[test]
fn configured_run_reports_text_lines() {
    let candidates = array![
        [0., 0., 1., 0., 1., 1., 0., 1., 0.9],
        [0., 0., 1., 0., 1., 1., 0., 1., 0.8],
        [5., 5., 6., 5., 6., 6., 5., 6., 0.05],
        [9., 9., 10., 9., 10., 10., 9., 10., 0.6],
    ];
    let config = NmsConfig::new().with_iou_threshold(0.3).with_min_score(0.1);
    let result = run_lanms(candidates.view(), &config).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.timing.candidates_in, 4);
    assert_eq!(result.timing.candidates_merged, 2);
    assert_eq!(result.timing.candidates_kept, 2);
    assert!(result.timing.merge_pass >= 0.0 && result.timing.suppression >= 0.0);

    let json = serde_json::to_value(&result).unwrap();
    let first = &json["text_lines"][0];
    assert_eq!(first["x1"], 1.0);
    assert_eq!(first["y3"], 1.0);
    assert!((first["score"].as_f64().unwrap() - 1.7).abs() < 1e-6);
    assert_eq!(json["text_lines"][1]["x0"], 9.0);
}

#[test]
fn invalid_threshold_is_rejected() {
    let candidates = Array2::<f32>::zeros((0, 9));
    for thres in [-0.1, 1.5, f32::NAN] {
        let config = NmsConfig::new().with_iou_threshold(thres);
        assert!(matches!(run_lanms(candidates.view(), &config), Err(LanmsError::InvalidThreshold(_))));
    }
}

#[test]
fn config_defaults_and_json() {
    let config = NmsConfig::default();
    assert_eq!(config.iou_threshold, 0.2);
    assert_eq!(config.min_score, None);
    assert!(!config.match_vertex_order);

    let partial: NmsConfig = serde_json::from_str(r#"{"iou_threshold": 0.5}"#).unwrap();
    assert_eq!(partial, NmsConfig::new().with_iou_threshold(0.5));

    let path = scratch_path("config.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"iou_threshold": 0.3, "min_score": 0.1, "match_vertex_order": true}"#).unwrap();
    let loaded = NmsConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, NmsConfig::new().with_iou_threshold(0.3).with_min_score(0.1).with_match_vertex_order(true));

    std::fs::write(&path, r#"{"iou_threshold": 2.0}"#).unwrap();
    assert!(NmsConfig::from_json_file(&path).is_err());
    assert!(NmsConfig::from_json_file(scratch_path("missing.json")).is_err());
}

#[test]
fn candidate_and_result_files() {
    let parsed = candidates_from_json_str("[[0,0,1,0,1,1,0,1,0.9],[0,0,1,0,1,1,0,1,0.8]]").unwrap();
    assert_eq!(parsed.shape(), &[2, 9]);
    assert!(candidates_from_json_str("[[0,0,1,0,1,1,0,1]]").is_err());
    assert!(candidates_from_json_str("not json").is_err());

    let path = scratch_path("candidates.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[[0,0,1,0,1,1,0,1,0.9]]").unwrap();
    let candidates = read_candidates_json(&path).unwrap();

    let result = run_lanms(candidates.view(), &NmsConfig::default()).unwrap();
    let out = scratch_path("out/result.json");
    write_result_json(&out, &result).unwrap();
    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["text_lines"].as_array().unwrap().len(), 1);
    assert_eq!(written["timing"]["candidates_in"], 1);
}

#[test]
fn batch_matches_sequential_runs() {
    let mut rng = StdRng::seed_from_u64(23);
    let sets: Vec<Array2<f32>> = (0..6)
        .map(|_| quads_to_array(&random_set(&mut rng, 40, 30.0)).unwrap())
        .collect();
    let config = NmsConfig::new().with_iou_threshold(0.3);

    let batch = run_lanms_batch(&sets, &config);
    assert_eq!(batch.len(), sets.len());
    for (set, out) in sets.iter().zip(batch) {
        assert_eq!(out.unwrap(), run_locality_aware_nms(set.view(), 0.3).unwrap());
    }
}

#[test]
fn batch_isolates_failures() {
    let good = quads_to_array(&[QuadBox::new([0., 0., 1., 0., 1., 1., 0., 1.], 0.9)]).unwrap();
    let bad = Array2::<f32>::zeros((2, 5));
    let results = run_lanms_batch(&[good.clone(), bad, good.clone()], &NmsConfig::default());
    assert_eq!(results[0].as_ref().unwrap(), &good);
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap(), &good);
}

#[test]
fn quad_extents() {
    let quad = QuadBox::new([3., -1., 7., 2., 5., 6., -2., 4.], 0.5);
    assert_eq!(quad.x_min(), -2.);
    assert_eq!(quad.y_min(), -1.);
    assert_eq!(quad.x_max(), 7.);
    assert_eq!(quad.y_max(), 6.);
}

#[test]
fn empty_result_and_config_summary() {
    let result = run_lanms(Array2::<f32>::zeros((0, 9)).view(), &NmsConfig::default()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.timing.candidates_kept, 0);

    let summary = NmsConfig::new().with_iou_threshold(0.3).with_min_score(0.1).to_string();
    assert!(summary.contains("IoU Threshold: 0.3"));
    assert!(summary.contains("Minimum Score: 0.1"));
    assert!(summary.contains("Match Vertex Order: false"));
    assert!(NmsConfig::default().to_string().contains("Minimum Score: none"));
}

#[test]
fn batch_honours_min_score_and_vertex_matching() {
    let candidates = array![
        [0., 0., 10., 0., 10., 10., 0., 10., 0.5],
        [10., 0., 10., 10., 0., 10., 0., 0., 0.5],
        [20., 20., 21., 20., 21., 21., 20., 21., 0.05],
    ];
    let config = NmsConfig::new()
        .with_iou_threshold(0.3)
        .with_min_score(0.1)
        .with_match_vertex_order(true);

    let batch = run_lanms_batch(&[candidates.clone()], &config);
    let kept = batch[0].as_ref().unwrap();
    let expected: Array2<f32> = array![[0., 0., 10., 0., 10., 10., 0., 10., 1.0]];
    assert_eq!(kept, &expected);

    let single = run_lanms(candidates.view(), &config).unwrap();
    let lines: Vec<QuadBox> = single.text_lines.iter().map(QuadBox::from).collect();
    assert_eq!(&quads_to_array(&lines).unwrap(), kept);
}
