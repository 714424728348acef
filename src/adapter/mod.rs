//! Boundary Adapter: the layer the surrounding application calls.
//!
//! It validates and coerces raw input, decides whether a computation is
//! needed at all, calls the primary backend and, when that backend is
//! missing or reports failure, recomputes with [`PureBackend`].

pub mod grading;
pub mod input;
pub mod record;
pub mod statistics;

pub use grading::{GradeOutcome, ModuleStatus};
pub use input::InputError;
pub use record::{RiskAssessment, RiskLevel, StoredRecord, StudentModuleRecord};
pub use statistics::StatisticsReport;

use crate::backend::{BackendKind, ComputeBackend, NativeBackend, PureBackend};
use crate::data::{BasicStats, ExamPair, FinalGradeResult, DEFAULT_THRESHOLD};
use crate::runtime::{AdapterConfig, BackendPreference};
use rayon::prelude::*;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Validation, backend selection and fallback for both use cases.
pub struct BoundaryAdapter {
    /// Tried first; `None` when no native module is in use.
    primary: Option<Arc<dyn ComputeBackend>>,
    fallback: PureBackend,
    threshold: f64,
    /// Worker count for a dedicated batch pool; rayon's global pool if `None`.
    batch_workers: Option<usize>,
    /// Built on the first batch call.
    pool: OnceLock<Option<rayon::ThreadPool>>,
}

impl BoundaryAdapter {
    /// Adapter that computes everything in-process.
    pub fn pure() -> Self {
        Self {
            primary: None,
            fallback: PureBackend,
            threshold: DEFAULT_THRESHOLD,
            batch_workers: None,
            pool: OnceLock::new(),
        }
    }

    /// Adapter with an explicit primary backend.
    pub fn with_backend(backend: Arc<dyn ComputeBackend>) -> Self {
        Self {
            primary: Some(backend),
            ..Self::pure()
        }
    }

    /// Build an adapter from configuration, loading the native module if
    /// requested. A module that cannot be loaded leaves the adapter on the
    /// pure path; that is never fatal.
    pub fn from_config(config: &AdapterConfig) -> Self {
        let primary: Option<Arc<dyn ComputeBackend>> = match config.backend {
            BackendPreference::Pure => None,
            BackendPreference::Auto | BackendPreference::Native => {
                match config.resolve_library_path() {
                    Some(path) => match NativeBackend::load(&path) {
                        Ok(native) => {
                            tracing::info!(path = %path.display(), "using native backend");
                            let native: Arc<dyn ComputeBackend> = Arc::new(native);
                            Some(native)
                        }
                        Err(err) if config.backend == BackendPreference::Native => {
                            tracing::warn!(class = ?err.class(), %err, "native backend unavailable, using fallback");
                            None
                        }
                        Err(err) => {
                            tracing::info!(%err, "native backend not found, using fallback");
                            None
                        }
                    },
                    None => {
                        tracing::warn!("cannot resolve native library path, using fallback");
                        None
                    }
                }
            }
        };

        Self {
            primary,
            fallback: PureBackend,
            threshold: config.threshold,
            batch_workers: Some(config.worker_count()),
            pool: OnceLock::new(),
        }
    }

    /// Set the default threshold. Non-finite values are ignored.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() {
            self.threshold = threshold;
        } else {
            tracing::warn!(threshold, "ignoring non-finite default threshold");
        }
        self
    }

    /// Get the default threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Kind of backend tried first.
    pub fn primary_kind(&self) -> BackendKind {
        self.primary
            .as_ref()
            .map_or(BackendKind::Pure, |backend| backend.kind())
    }

    // ------------------------------------------------------------------
    // Statistics (fails closed)
    // ------------------------------------------------------------------

    /// Summarize raw inbound scores. Nulls are dropped; any other
    /// non-numeric entry rejects the request.
    pub fn compute_statistics(&self, raw: &[Value]) -> Result<StatisticsReport, InputError> {
        let scores = input::statistics_scores(raw)?;
        Ok(self.summarize(&scores))
    }

    /// Summarize optional floats; non-finite values reject the request.
    pub fn compute_statistics_values(
        &self,
        raw: &[Option<f64>],
    ) -> Result<StatisticsReport, InputError> {
        let scores = input::statistics_values(raw)?;
        Ok(self.summarize(&scores))
    }

    /// Summarize many raw lists in parallel, one result per list.
    pub fn compute_statistics_batch(
        &self,
        lists: &[Vec<Value>],
    ) -> Vec<Result<StatisticsReport, InputError>> {
        let run = || -> Vec<Result<StatisticsReport, InputError>> {
            lists
                .par_iter()
                .map(|raw| self.compute_statistics(raw))
                .collect()
        };
        match self.batch_pool() {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn batch_pool(&self) -> Option<&rayon::ThreadPool> {
        let workers = self.batch_workers?;
        self.pool
            .get_or_init(|| {
                match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                    Ok(pool) => {
                        tracing::debug!(workers, "built batch pool");
                        Some(pool)
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to build batch pool, using global pool");
                        None
                    }
                }
            })
            .as_ref()
    }

    /// Summarize validated scores.
    pub fn summarize(&self, scores: &[f64]) -> StatisticsReport {
        match self.basic_stats(scores) {
            Some(stats) => StatisticsReport::from_stats(stats, scores.len()),
            None => StatisticsReport::no_data(),
        }
    }

    fn basic_stats(&self, scores: &[f64]) -> Option<BasicStats> {
        if scores.is_empty() {
            return None;
        }
        if let Some(primary) = &self.primary {
            match primary.basic_stats(scores) {
                Ok(stats) => return Some(stats),
                Err(err) => {
                    tracing::warn!(
                        backend = primary.name(),
                        operation = "basic_stats",
                        class = ?err.class(),
                        %err,
                        "backend failed, recomputing in-process"
                    );
                }
            }
        }
        self.fallback.basic_stats(scores).ok()
    }

    // ------------------------------------------------------------------
    // Final grade (fails open)
    // ------------------------------------------------------------------

    /// Final grade with the configured threshold.
    pub fn compute_final_grade(&self, exam1: Option<f64>, exam2: Option<f64>) -> GradeOutcome {
        self.compute_final_grade_with_threshold(exam1, exam2, self.threshold)
    }

    /// Final grade with an explicit threshold. Missing, out-of-range or
    /// non-finite scores make the outcome pending; nothing is raised.
    pub fn compute_final_grade_with_threshold(
        &self,
        exam1: Option<f64>,
        exam2: Option<f64>,
        threshold: f64,
    ) -> GradeOutcome {
        let threshold = if threshold.is_finite() {
            threshold
        } else {
            tracing::warn!(threshold, default = self.threshold, "non-finite threshold, using default");
            self.threshold
        };

        let Some((exam1, exam2)) = ExamPair::from_raw(exam1, exam2).both() else {
            tracing::debug!(?exam1, ?exam2, "exam missing or out of range, grade pending");
            return GradeOutcome::pending();
        };

        self.final_grade(exam1.value(), exam2.value(), threshold).into()
    }

    /// Final grade from raw JSON values.
    pub fn compute_final_grade_raw(&self, exam1: &Value, exam2: &Value) -> GradeOutcome {
        self.compute_final_grade(input::exam_from_value(exam1), input::exam_from_value(exam2))
    }

    /// Final grade from submitted form text.
    pub fn compute_final_grade_text(&self, exam1: &str, exam2: &str) -> GradeOutcome {
        self.compute_final_grade(input::exam_from_text(exam1), input::exam_from_text(exam2))
    }

    fn final_grade(&self, exam1: f64, exam2: f64, threshold: f64) -> FinalGradeResult {
        if let Some(primary) = &self.primary {
            match primary.final_grade(exam1, exam2, threshold) {
                Ok(result) => return result,
                Err(err) => {
                    tracing::warn!(
                        backend = primary.name(),
                        operation = "final_grade",
                        class = ?err.class(),
                        %err,
                        "backend failed, recomputing in-process"
                    );
                }
            }
        }
        crate::data::evaluate_final_grade(exam1, exam2, threshold)
    }
}

impl Default for BoundaryAdapter {
    fn default() -> Self {
        Self::pure()
    }
}

impl std::fmt::Debug for BoundaryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryAdapter")
            .field("primary", &self.primary_kind())
            .field("threshold", &self.threshold)
            .field("batch_workers", &self.batch_workers)
            .finish()
    }
}
