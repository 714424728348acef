//! gradecore - grade computation core.
//!
//! This crate computes descriptive statistics over scores and evaluates a
//! final grade from two exams. It is built both as a Rust library and as
//! a C-ABI shared object:
//!
//! - Pure numeric functions with deterministic, single-pass results
//! - A native module with fixed-layout records and integer status codes
//! - A Boundary Adapter that validates input and falls back in-process
//!   whenever the native module is missing or fails
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Boundary Adapter            │
//! │  validation · gating · fallback     │
//! └─────────────────────────────────────┘
//!           │                 │
//!           ▼                 ▼
//! ┌──────────────────┐ ┌──────────────────┐
//! │  NativeBackend   │ │   PureBackend    │
//! │ (dlopen, C ABI)  │ │  (direct calls)  │
//! └──────────────────┘ └──────────────────┘
//!           │                 │
//!           ▼                 ▼
//! ┌─────────────────────────────────────┐
//! │   data: compute_basic_stats,        │
//! │         evaluate_final_grade        │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! BasicStatsRecord stats;
//! if (compute_basic_stats(values, n, &stats) == 1) { /* stats.mean ... */ }
//!
//! FinalGradeRecord grade;
//! compute_final_grade(6.9, 7.0, 7.0, &grade); /* grade.status_code == 1 */
//! ```
//!
//! # Rust Usage
//!
//! ```
//! use gradecore::{BoundaryAdapter, ModuleStatus};
//!
//! let adapter = BoundaryAdapter::pure();
//! let outcome = adapter.compute_final_grade(Some(7.0), Some(7.0));
//! assert_eq!(outcome.status, ModuleStatus::Passed);
//! ```

pub mod adapter;
pub mod backend;
pub mod data;
pub mod ffi;
pub mod logging;
pub mod runtime;

// Re-export commonly used items
pub use adapter::{
    BoundaryAdapter, GradeOutcome, InputError, ModuleStatus, RiskAssessment, RiskLevel,
    StatisticsReport, StoredRecord, StudentModuleRecord,
};
pub use backend::{BackendError, BackendKind, ComputeBackend, FailureClass, NativeBackend, PureBackend};
pub use data::{
    compute_basic_stats, evaluate_final_grade, BasicStats, EmptyScores, ExamPair, ExamScore,
    FinalGradeResult, DEFAULT_THRESHOLD,
};
pub use runtime::{install_adapter, shared_adapter, AdapterConfig, BackendPreference, ConfigError};
