//! Exported C-ABI entry points. Built into the `cdylib`, these form the
//! optional native module that `NativeBackend` loads at runtime.

use super::types::{
    BasicStatsRecord, FinalGradeRecord, GRADE_FAILED, GRADE_PASSED, STATUS_FAILURE,
    STATUS_SUCCESS,
};
use crate::data::{compute_basic_stats as basic_stats, evaluate_final_grade};
use libc::{c_int, size_t};

/// Compute mean, minimum and maximum of `len` doubles.
///
/// Returns 1 on success, 0 when a pointer is null or `len` is zero.
///
/// # Safety
/// `values` must point to `len` readable doubles and `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn compute_basic_stats(
    values: *const f64,
    len: size_t,
    out: *mut BasicStatsRecord,
) -> c_int {
    if values.is_null() || out.is_null() || len == 0 {
        return STATUS_FAILURE;
    }

    let slice = std::slice::from_raw_parts(values, len);
    match basic_stats(slice) {
        Ok(stats) => {
            *out = BasicStatsRecord {
                mean: stats.mean,
                min: stats.min,
                max: stats.max,
            };
            STATUS_SUCCESS
        }
        Err(_) => STATUS_FAILURE,
    }
}

/// Compute the final score of two exams and compare it with `threshold`.
///
/// Returns 1 on success, 0 when `out` is null.
///
/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn compute_final_grade(
    exam1: f64,
    exam2: f64,
    threshold: f64,
    out: *mut FinalGradeRecord,
) -> c_int {
    if out.is_null() {
        return STATUS_FAILURE;
    }

    let result = evaluate_final_grade(exam1, exam2, threshold);
    *out = FinalGradeRecord {
        final_score: result.final_score,
        status_code: if result.passed { GRADE_PASSED } else { GRADE_FAILED },
    };
    STATUS_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_export() {
        let data = [7.5, 8.0, 5.0];
        let mut out = BasicStatsRecord::default();
        let status = unsafe { compute_basic_stats(data.as_ptr(), data.len(), &mut out) };

        assert_eq!(status, STATUS_SUCCESS);
        assert_eq!(out.min, 5.0);
        assert_eq!(out.max, 8.0);
    }

    #[test]
    fn test_stats_export_rejects_empty() {
        let data: [f64; 0] = [];
        let mut out = BasicStatsRecord::default();
        let status = unsafe { compute_basic_stats(data.as_ptr(), 0, &mut out) };
        assert_eq!(status, STATUS_FAILURE);
        assert_eq!(out, BasicStatsRecord::default());
    }

    #[test]
    fn test_stats_export_null_pointers() {
        let mut out = BasicStatsRecord::default();
        let status = unsafe { compute_basic_stats(std::ptr::null(), 3, &mut out) };
        assert_eq!(status, STATUS_FAILURE);

        let data = [1.0];
        let status = unsafe { compute_basic_stats(data.as_ptr(), 1, std::ptr::null_mut()) };
        assert_eq!(status, STATUS_FAILURE);
    }

    #[test]
    fn test_grade_export() {
        let mut out = FinalGradeRecord::default();
        let status = unsafe { compute_final_grade(6.0, 7.0, 7.0, &mut out) };

        assert_eq!(status, STATUS_SUCCESS);
        assert_eq!(out.final_score, 6.5);
        assert_eq!(out.status_code, GRADE_FAILED);
    }

    #[test]
    fn test_grade_export_null_out() {
        let status = unsafe { compute_final_grade(6.0, 7.0, 7.0, std::ptr::null_mut()) };
        assert_eq!(status, STATUS_FAILURE);
    }
}
