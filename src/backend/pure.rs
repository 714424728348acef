//! In-process backend calling the Rust computations directly.

use super::traits::{BackendError, BackendKind, ComputeBackend};
use crate::data::{compute_basic_stats, evaluate_final_grade, BasicStats, FinalGradeResult};

/// Backend that never crosses the C ABI. It has no failure mode other than
/// empty statistics input, which mirrors the native status 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct PureBackend;

impl ComputeBackend for PureBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Pure
    }

    fn basic_stats(&self, scores: &[f64]) -> Result<BasicStats, BackendError> {
        compute_basic_stats(scores).map_err(|_| BackendError::Computation {
            operation: "compute_basic_stats",
            status: 0,
        })
    }

    fn final_grade(
        &self,
        exam1: f64,
        exam2: f64,
        threshold: f64,
    ) -> Result<FinalGradeResult, BackendError> {
        Ok(evaluate_final_grade(exam1, exam2, threshold))
    }
}
