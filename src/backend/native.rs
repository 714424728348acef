//! Backend that calls the native module through its C ABI.

use super::traits::{BackendError, BackendKind, ComputeBackend};
use crate::data::{BasicStats, FinalGradeResult};
use crate::ffi::{
    BasicStatsFn, BasicStatsRecord, FinalGradeFn, FinalGradeRecord, NativeStatus, GRADE_PASSED,
};
use libloading::Library;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Exported name of the statistics entry point.
pub const BASIC_STATS_SYMBOL: &str = "compute_basic_stats";

/// Exported name of the final grade entry point.
pub const FINAL_GRADE_SYMBOL: &str = "compute_final_grade";

/// Platform file name of the native module (`libgradecore.so`, `gradecore.dll`, ...).
pub fn library_file_name() -> OsString {
    libloading::library_filename("gradecore")
}

/// Where the entry points of a `NativeBackend` came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeOrigin {
    /// Resolved from a shared object at this path.
    Library(PathBuf),
    /// Statically linked function pointers.
    Linked,
}

/// Native computation backend.
///
/// All marshaling happens here: slices become pointer + length, results come
/// back through fixed-layout records, and integer statuses become
/// `BackendError::Computation`.
pub struct NativeBackend {
    basic_stats_fn: BasicStatsFn,
    final_grade_fn: FinalGradeFn,
    origin: NativeOrigin,
    // Keeps the resolved entry points mapped.
    _library: Option<Library>,
}

impl NativeBackend {
    /// Load the native module from `path` and resolve both entry points.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();

        // SAFETY: opening the library runs its initializers; the native
        // module has none beyond the platform defaults.
        let library = unsafe { Library::new(path) }.map_err(|source| BackendError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the declared signatures match the exported C prototypes.
        let basic_stats_fn = unsafe { resolve::<BasicStatsFn>(&library, path, BASIC_STATS_SYMBOL) }?;
        let final_grade_fn = unsafe { resolve::<FinalGradeFn>(&library, path, FINAL_GRADE_SYMBOL) }?;

        tracing::debug!(path = %path.display(), "loaded native module");

        Ok(Self {
            basic_stats_fn,
            final_grade_fn,
            origin: NativeOrigin::Library(path.to_path_buf()),
            _library: Some(library),
        })
    }

    /// Use the entry points exported by this crate without loading a library.
    pub fn linked() -> Self {
        // SAFETY: these are the crate's own exports, which honor the contract.
        unsafe {
            Self::from_symbols(
                crate::ffi::compute_basic_stats,
                crate::ffi::compute_final_grade,
            )
        }
    }

    /// Build a backend from raw entry points.
    ///
    /// # Safety
    /// Both functions must follow the native module's C contract: read only
    /// `len` values, write only through `out`, and return 1 or 0.
    pub unsafe fn from_symbols(basic_stats: BasicStatsFn, final_grade: FinalGradeFn) -> Self {
        Self {
            basic_stats_fn: basic_stats,
            final_grade_fn: final_grade,
            origin: NativeOrigin::Linked,
            _library: None,
        }
    }

    /// Get where the entry points came from.
    pub fn origin(&self) -> &NativeOrigin {
        &self.origin
    }
}

impl std::fmt::Debug for NativeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeBackend")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

unsafe fn resolve<T: Copy>(
    library: &Library,
    path: &Path,
    symbol: &'static str,
) -> Result<T, BackendError> {
    library
        .get::<T>(symbol.as_bytes())
        .map(|sym| *sym)
        .map_err(|source| BackendError::MissingSymbol {
            path: path.to_path_buf(),
            symbol,
            source,
        })
}

impl ComputeBackend for NativeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn basic_stats(&self, scores: &[f64]) -> Result<BasicStats, BackendError> {
        let mut out = BasicStatsRecord::default();
        // SAFETY: `scores` is valid for `len` reads and `out` is a live local.
        let status = unsafe { (self.basic_stats_fn)(scores.as_ptr(), scores.len(), &mut out) };

        match NativeStatus::from(status) {
            NativeStatus::Success => Ok(BasicStats {
                mean: out.mean,
                min: out.min,
                max: out.max,
            }),
            NativeStatus::Failure => Err(BackendError::Computation {
                operation: BASIC_STATS_SYMBOL,
                status,
            }),
        }
    }

    fn final_grade(
        &self,
        exam1: f64,
        exam2: f64,
        threshold: f64,
    ) -> Result<FinalGradeResult, BackendError> {
        let mut out = FinalGradeRecord::default();
        // SAFETY: `out` is a live local.
        let status = unsafe { (self.final_grade_fn)(exam1, exam2, threshold, &mut out) };

        match NativeStatus::from(status) {
            NativeStatus::Success => Ok(FinalGradeResult {
                final_score: out.final_score,
                passed: out.status_code == GRADE_PASSED,
            }),
            NativeStatus::Failure => Err(BackendError::Computation {
                operation: FINAL_GRADE_SYMBOL,
                status,
            }),
        }
    }
}
