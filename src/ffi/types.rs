//! C-compatible type definitions for the native module.

use libc::{c_int, size_t};

/// Returned by native calls on success.
pub const STATUS_SUCCESS: c_int = 1;

/// Returned by native calls on failure (null pointer, zero-length input).
pub const STATUS_FAILURE: c_int = 0;

/// `status_code` value for a passed grade.
pub const GRADE_PASSED: i32 = 1;

/// `status_code` value for a failed grade.
pub const GRADE_FAILED: i32 = 0;

/// Fixed-layout output of `compute_basic_stats`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BasicStatsRecord {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Fixed-layout output of `compute_final_grade`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinalGradeRecord {
    pub final_score: f64,
    /// 1 = passed, 0 = failed.
    pub status_code: i32,
}

/// Signature of the exported basic statistics entry point.
pub type BasicStatsFn =
    unsafe extern "C" fn(values: *const f64, len: size_t, out: *mut BasicStatsRecord) -> c_int;

/// Signature of the exported final grade entry point.
pub type FinalGradeFn = unsafe extern "C" fn(
    exam1: f64,
    exam2: f64,
    threshold: f64,
    out: *mut FinalGradeRecord,
) -> c_int;

/// Native return status as seen by the Rust side.
///
/// Foreign code may return any integer; only `STATUS_SUCCESS` counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeStatus {
    Success,
    Failure,
}

impl From<c_int> for NativeStatus {
    fn from(code: c_int) -> Self {
        if code == STATUS_SUCCESS {
            NativeStatus::Success
        } else {
            NativeStatus::Failure
        }
    }
}
