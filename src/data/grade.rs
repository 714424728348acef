//! Final grade evaluation from two exam scores.

/// Default pass/fail cutoff applied to the final score.
pub const DEFAULT_THRESHOLD: f64 = 7.0;

/// Lowest valid exam score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest valid exam score.
pub const MAX_SCORE: f64 = 10.0;

/// Weighted final score and its pass/fail classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalGradeResult {
    /// Mean of the two exams, unrounded.
    pub final_score: f64,

    /// `final_score >= threshold`.
    pub passed: bool,
}

/// An exam score known to be finite and within `[0, 10]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ExamScore(f64);

impl ExamScore {
    /// Validate a raw score. Out-of-range and non-finite values yield `None`.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// A student's two evaluations for one module, each possibly absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExamPair {
    pub exam1: Option<ExamScore>,
    pub exam2: Option<ExamScore>,
}

impl ExamPair {
    /// Validate both raw scores; invalid ones become absent.
    pub fn from_raw(exam1: Option<f64>, exam2: Option<f64>) -> Self {
        Self {
            exam1: exam1.and_then(ExamScore::new),
            exam2: exam2.and_then(ExamScore::new),
        }
    }

    /// Both scores, if both are present.
    pub fn both(&self) -> Option<(ExamScore, ExamScore)> {
        Some((self.exam1?, self.exam2?))
    }
}

/// Evaluate the final score and pass/fail outcome.
///
/// Total over all inputs: range checks belong to the caller.
pub fn evaluate_final_grade(exam1: f64, exam2: f64, threshold: f64) -> FinalGradeResult {
    let final_score = (exam1 + exam2) / 2.0;
    FinalGradeResult {
        final_score,
        passed: final_score >= threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let result = evaluate_final_grade(7.0, 7.0, DEFAULT_THRESHOLD);
        assert_eq!(result, FinalGradeResult { final_score: 7.0, passed: true });
    }

    #[test]
    fn test_no_rounding() {
        let result = evaluate_final_grade(6.9, 7.0, DEFAULT_THRESHOLD);
        assert_eq!(result.final_score, (6.9 + 7.0) / 2.0);
        assert!(result.passed);
    }

    #[test]
    fn test_failed_below_threshold() {
        let result = evaluate_final_grade(5.0, 6.0, DEFAULT_THRESHOLD);
        assert_eq!(result.final_score, 5.5);
        assert!(!result.passed);
    }

    #[test]
    fn test_custom_threshold() {
        assert!(evaluate_final_grade(5.0, 6.0, 5.0).passed);
        assert!(!evaluate_final_grade(9.0, 9.0, 9.5).passed);
    }

    #[test]
    fn test_exam_score_range() {
        assert!(ExamScore::new(0.0).is_some());
        assert!(ExamScore::new(10.0).is_some());
        assert!(ExamScore::new(-1.0).is_none());
        assert!(ExamScore::new(11.5).is_none());
        assert!(ExamScore::new(f64::NAN).is_none());
        assert!(ExamScore::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_exam_pair_gating() {
        assert!(ExamPair::from_raw(Some(8.0), None).both().is_none());
        assert!(ExamPair::from_raw(Some(-1.0), Some(5.0)).both().is_none());

        let (a, b) = ExamPair::from_raw(Some(8.0), Some(6.0)).both().unwrap();
        assert_eq!((a.value(), b.value()), (8.0, 6.0));
    }
}
