//! FFI (Foreign Function Interface) layer.
//!
//! This module defines the fixed-layout records and status codes of the
//! native module, and exports the two C-ABI entry points that make up the
//! shared object.

pub mod exports;
pub mod types;

pub use exports::{compute_basic_stats, compute_final_grade};
pub use types::{
    BasicStatsFn, BasicStatsRecord, FinalGradeFn, FinalGradeRecord, NativeStatus, GRADE_FAILED,
    GRADE_PASSED, STATUS_FAILURE, STATUS_SUCCESS,
};
