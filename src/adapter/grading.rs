//! Result shape of the grade use case.

use crate::data::FinalGradeResult;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a student's grade in one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    /// At least one exam is missing.
    #[default]
    Pending,
    Passed,
    Failed,
}

impl ModuleStatus {
    /// Get the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::Pending => "pending",
            ModuleStatus::Passed => "passed",
            ModuleStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a grade computation at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub final_score: Option<f64>,
    pub status: ModuleStatus,
}

impl GradeOutcome {
    /// Outcome while an exam is still missing.
    pub fn pending() -> Self {
        Self {
            final_score: None,
            status: ModuleStatus::Pending,
        }
    }
}

impl From<FinalGradeResult> for GradeOutcome {
    fn from(result: FinalGradeResult) -> Self {
        Self {
            final_score: Some(result.final_score),
            status: if result.passed {
                ModuleStatus::Passed
            } else {
                ModuleStatus::Failed
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_value(GradeOutcome::pending()).unwrap();
        assert_eq!(json, serde_json::json!({"final_score": null, "status": "pending"}));
        assert_eq!(ModuleStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_from_result() {
        let outcome = GradeOutcome::from(FinalGradeResult {
            final_score: 4.0,
            passed: false,
        });
        assert_eq!(outcome.status, ModuleStatus::Failed);
        assert_eq!(outcome.final_score, Some(4.0));
    }
}
