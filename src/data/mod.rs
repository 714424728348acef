//! Pure numeric computations: basic statistics and final grade evaluation.

pub mod grade;
pub mod stats;

pub use grade::{
    evaluate_final_grade, ExamPair, ExamScore, FinalGradeResult, DEFAULT_THRESHOLD, MAX_SCORE,
    MIN_SCORE,
};
pub use stats::{compute_basic_stats, BasicStats, EmptyScores};
