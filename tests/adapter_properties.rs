//! Boundary-level properties of the statistics and grade use cases,
//! checked against both the pure and the native (linked) backend.

use std::sync::Arc;

use gradecore::{BoundaryAdapter, GradeOutcome, ModuleStatus, NativeBackend, StatisticsReport};
use serde_json::{json, Value};

fn adapters() -> Vec<(&'static str, BoundaryAdapter)> {
    vec![
        ("pure", BoundaryAdapter::pure()),
        (
            "native",
            BoundaryAdapter::with_backend(Arc::new(NativeBackend::linked())),
        ),
    ]
}

fn score_lists() -> Vec<Vec<f64>> {
    vec![
        vec![7.5, 8.0, 5.0],
        vec![0.0],
        vec![10.0, 10.0, 10.0, 10.0],
        vec![3.25, 9.75, 0.5, 6.0, 6.0, 1.125, 8.875],
        (0..100).map(|i| (i * 37 % 101) as f64 / 10.1).collect(),
    ]
}

fn to_values(scores: &[f64]) -> Vec<Value> {
    scores.iter().map(|s| json!(s)).collect()
}

#[test]
fn mean_lies_between_extrema() {
    for (name, adapter) in adapters() {
        for scores in score_lists() {
            let report = adapter.compute_statistics(&to_values(&scores)).unwrap();
            let (min, mean, max) = (
                report.min.unwrap(),
                report.mean.unwrap(),
                report.max.unwrap(),
            );
            assert!(min <= mean && mean <= max, "{name}: {report:?}");
            assert_eq!(report.count, scores.len());
        }
    }
}

#[test]
fn huge_finite_scores_keep_a_finite_mean() {
    for (name, adapter) in adapters() {
        for scores in [vec![1e308, 1e308], vec![f64::MAX, f64::MAX, 1.0]] {
            let report = adapter.compute_statistics(&to_values(&scores)).unwrap();
            let mean = report.mean.unwrap();
            assert!(mean.is_finite(), "{name}: {report:?}");
            assert!(report.min.unwrap() <= mean && mean <= report.max.unwrap());
        }
    }
}

#[test]
fn reordering_keeps_extrema_and_mean() {
    let adapter = BoundaryAdapter::pure();
    for scores in score_lists() {
        let mut rotated = scores.clone();
        rotated.rotate_left(scores.len() / 2);
        let mut reversed = scores.clone();
        reversed.reverse();

        let base = adapter.compute_statistics(&to_values(&scores)).unwrap();
        for permuted in [rotated, reversed] {
            let other = adapter.compute_statistics(&to_values(&permuted)).unwrap();
            assert_eq!(base.min, other.min);
            assert_eq!(base.max, other.max);
            assert!((base.mean.unwrap() - other.mean.unwrap()).abs() < 1e-9);
        }
    }
}

#[test]
fn identical_input_gives_bit_identical_mean() {
    let scores = score_lists().pop().unwrap();
    let pure = BoundaryAdapter::pure().summarize(&scores);
    let native = BoundaryAdapter::with_backend(Arc::new(NativeBackend::linked())).summarize(&scores);

    assert_eq!(
        pure.mean.unwrap().to_bits(),
        native.mean.unwrap().to_bits()
    );
}

#[test]
fn empty_and_all_null_are_no_data() {
    for (_, adapter) in adapters() {
        assert_eq!(adapter.compute_statistics(&[]).unwrap(), StatisticsReport::no_data());
        assert_eq!(
            adapter.compute_statistics(&[Value::Null, Value::Null]).unwrap(),
            StatisticsReport::no_data()
        );
    }
}

#[test]
fn statistics_reject_non_numeric_entries() {
    let adapter = BoundaryAdapter::pure();
    for bad in [json!("abc"), json!(true), json!([1]), json!({"score": 7})] {
        let raw = vec![json!(7.0), Value::Null, bad];
        assert!(adapter.compute_statistics(&raw).is_err());
    }
}

#[test]
fn statistics_example() {
    let report = BoundaryAdapter::pure()
        .compute_statistics(&[json!(7.5), json!(8.0), json!(5.0)])
        .unwrap();

    assert!((report.mean.unwrap() - 6.833_333_333_333_333).abs() < 1e-12);
    assert_eq!(report.min, Some(5.0));
    assert_eq!(report.max, Some(8.0));
    assert_eq!(report.count, 3);
}

#[test]
fn native_and_pure_grades_match_over_the_range() {
    let native = BoundaryAdapter::with_backend(Arc::new(NativeBackend::linked()));
    let pure = BoundaryAdapter::pure();

    for i in 0..=100 {
        for j in (0..=100).step_by(7) {
            let (a, b) = (i as f64 / 10.0, j as f64 / 10.0);
            let n = native.compute_final_grade(Some(a), Some(b));
            let p = pure.compute_final_grade(Some(a), Some(b));
            assert_eq!(n.status, p.status);
            assert_eq!(
                n.final_score.unwrap().to_bits(),
                p.final_score.unwrap().to_bits()
            );
        }
    }
}

#[test]
fn grade_examples() {
    for (name, adapter) in adapters() {
        assert_eq!(
            adapter.compute_final_grade(Some(7.0), Some(7.0)),
            GradeOutcome {
                final_score: Some(7.0),
                status: ModuleStatus::Passed
            },
            "{name}"
        );

        let outcome = adapter.compute_final_grade(Some(6.9), Some(7.0));
        assert!((outcome.final_score.unwrap() - 6.95).abs() < 1e-12, "{name}");
        assert_eq!(outcome.status, ModuleStatus::Passed, "{name}");

        assert_eq!(
            adapter.compute_final_grade(None, Some(8.0)),
            GradeOutcome::pending(),
            "{name}"
        );
        assert_eq!(
            adapter.compute_final_grade(Some(-1.0), Some(5.0)),
            GradeOutcome::pending(),
            "{name}"
        );
    }
}

#[test]
fn recomputation_is_idempotent() {
    let adapter = BoundaryAdapter::pure();
    let first = adapter.compute_final_grade(Some(6.5), Some(7.25));
    for _ in 0..10 {
        assert_eq!(adapter.compute_final_grade(Some(6.5), Some(7.25)), first);
    }
}
