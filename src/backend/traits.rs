//! Backend trait definitions.

use crate::data::{BasicStats, FinalGradeResult};
use std::path::PathBuf;
use thiserror::Error;

/// Identifier for a backend implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Calls through the C-ABI entry points of the native module.
    Native,
    /// Calls the Rust functions directly.
    Pure,
}

impl BackendKind {
    /// Get the string name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Native => "native",
            BackendKind::Pure => "pure",
        }
    }
}

/// Broad category of a backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The backend could not be brought up at all.
    LoadFailure,
    /// The backend ran but reported a non-success status.
    ComputationFailure,
}

/// Errors raised by a computation backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The shared object could not be opened.
    #[error("failed to load native library {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The shared object was opened but lacks a required entry point.
    #[error("native library {} has no symbol `{symbol}`: {source}", path.display())]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    /// The call returned a failure status.
    #[error("{operation} returned failure status {status}")]
    Computation {
        operation: &'static str,
        status: i32,
    },
}

impl BackendError {
    /// Classify the failure for status mapping.
    pub fn class(&self) -> FailureClass {
        match self {
            BackendError::Load { .. } | BackendError::MissingSymbol { .. } => {
                FailureClass::LoadFailure
            }
            BackendError::Computation { .. } => FailureClass::ComputationFailure,
        }
    }
}

/// A provider of the two core computations.
///
/// Implementations must be deterministic: the same input always yields the
/// same output, bit for bit.
pub trait ComputeBackend: Send + Sync {
    /// Get the backend identifier.
    fn kind(&self) -> BackendKind;

    /// Mean and extrema of `scores`. Empty input is a computation failure.
    fn basic_stats(&self, scores: &[f64]) -> Result<BasicStats, BackendError>;

    /// Final score and pass/fail outcome of two exams.
    fn final_grade(
        &self,
        exam1: f64,
        exam2: f64,
        threshold: f64,
    ) -> Result<FinalGradeResult, BackendError>;

    /// Get the backend name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
