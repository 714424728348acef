//! A student's grade record for one module, as held by the surrounding
//! application.

use super::grading::{GradeOutcome, ModuleStatus};
use super::BoundaryAdapter;
use crate::data::ExamPair;
use serde::{Deserialize, Serialize};

/// Grade record for one `(student_id, module_id)` pair.
///
/// `final_score` and `status` are derived: they change only through a full
/// recomputation from the exam scores, never on their own. Records are read
/// back from storage through [`StoredRecord`], which carries no derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentModuleRecord {
    pub student_id: u64,
    pub module_id: u64,
    exam1: Option<f64>,
    exam2: Option<f64>,
    final_score: Option<f64>,
    status: ModuleStatus,
}

impl StudentModuleRecord {
    /// A freshly associated student: no exams, pending.
    pub fn new(student_id: u64, module_id: u64) -> Self {
        Self {
            student_id,
            module_id,
            exam1: None,
            exam2: None,
            final_score: None,
            status: ModuleStatus::Pending,
        }
    }

    /// Rebuild a record from its persisted exam scores.
    ///
    /// Whatever final score or status was stored alongside is ignored; both
    /// are recomputed through `adapter`.
    pub fn from_stored(stored: StoredRecord, adapter: &BoundaryAdapter) -> Self {
        let mut record = Self::new(stored.student_id, stored.module_id);
        record.set_exams(stored.exam1, stored.exam2, adapter);
        record
    }

    /// The persisted part of this record.
    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord {
            student_id: self.student_id,
            module_id: self.module_id,
            exam1: self.exam1,
            exam2: self.exam2,
        }
    }

    /// Replace both exam scores and recompute the derived fields.
    ///
    /// Invalid scores are stored as absent. Returns whether any field changed.
    pub fn set_exams(
        &mut self,
        exam1: Option<f64>,
        exam2: Option<f64>,
        adapter: &BoundaryAdapter,
    ) -> bool {
        let pair = ExamPair::from_raw(exam1, exam2);
        let exam1 = pair.exam1.map(|e| e.value());
        let exam2 = pair.exam2.map(|e| e.value());
        let outcome = adapter.compute_final_grade(exam1, exam2);

        let changed = self.exam1 != exam1
            || self.exam2 != exam2
            || self.final_score != outcome.final_score
            || self.status != outcome.status;

        self.exam1 = exam1;
        self.exam2 = exam2;
        self.apply(outcome);
        changed
    }

    /// Replace the first exam score, keeping the second.
    pub fn set_exam1(&mut self, exam1: Option<f64>, adapter: &BoundaryAdapter) -> bool {
        self.set_exams(exam1, self.exam2, adapter)
    }

    /// Replace the second exam score, keeping the first.
    pub fn set_exam2(&mut self, exam2: Option<f64>, adapter: &BoundaryAdapter) -> bool {
        self.set_exams(self.exam1, exam2, adapter)
    }

    fn apply(&mut self, outcome: GradeOutcome) {
        self.final_score = outcome.final_score;
        self.status = outcome.status;
    }

    #[inline]
    pub fn exam1(&self) -> Option<f64> {
        self.exam1
    }

    #[inline]
    pub fn exam2(&self) -> Option<f64> {
        self.exam2
    }

    #[inline]
    pub fn final_score(&self) -> Option<f64> {
        self.final_score
    }

    #[inline]
    pub fn status(&self) -> ModuleStatus {
        self.status
    }

    /// Rule-based risk classification of this record.
    pub fn risk(&self) -> RiskAssessment {
        RiskAssessment::classify(self.exam1, self.exam2, self.final_score)
    }
}

/// Persisted form of a [`StudentModuleRecord`]: identifiers and exam scores.
///
/// Derived fields present in the input (`final_score`, `status`) are
/// ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub student_id: u64,
    pub module_id: u64,
    #[serde(default)]
    pub exam1: Option<f64>,
    #[serde(default)]
    pub exam2: Option<f64>,
}

/// Score below which a student is at high risk.
const HIGH_RISK_BELOW: f64 = 5.0;

/// Score below which a student is at moderate risk.
const MODERATE_RISK_BELOW: f64 = 7.0;

/// How much attention a student's grade needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Pending,
    Ok,
    Moderate,
    High,
}

/// A risk level with its advice for the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub recommendation: &'static str,
}

impl RiskAssessment {
    /// Classify from exam scores and the derived final score.
    pub fn classify(exam1: Option<f64>, exam2: Option<f64>, final_score: Option<f64>) -> Self {
        let (level, recommendation) = match final_score {
            None => match (exam1, exam2) {
                (Some(e1), None) if e1 < HIGH_RISK_BELOW => (
                    RiskLevel::Moderate,
                    "Study ahead of the second exam: the first one is below 5.",
                ),
                _ => (RiskLevel::Pending, "Wait until both exams are graded."),
            },
            Some(score) if score < HIGH_RISK_BELOW => (
                RiskLevel::High,
                "Seek tutoring and review the fundamentals.",
            ),
            Some(score) if score < MODERATE_RISK_BELOW => (
                RiskLevel::Moderate,
                "Step up revision to bring the average above 7.",
            ),
            Some(_) => (RiskLevel::Ok, "Good performance. Keep it up."),
        };
        Self {
            level,
            recommendation,
        }
    }
}
