//! Adapter configuration.

use crate::backend::library_file_name;
use crate::data::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming the native module path.
pub const ENV_LIBRARY: &str = "GRADECORE_NATIVE_LIB";

/// Environment variable selecting the backend (`auto`, `native`, `pure`).
pub const ENV_BACKEND: &str = "GRADECORE_BACKEND";

/// Environment variable overriding the pass threshold.
pub const ENV_THRESHOLD: &str = "GRADECORE_THRESHOLD";

/// Which backend the adapter should try first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Use the native module when it can be found, quietly skip it otherwise.
    #[default]
    Auto,
    /// Expect the native module; its absence is logged as a warning.
    Native,
    /// Never load the native module.
    Pure,
}

impl FromStr for BackendPreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "native" => Ok(BackendPreference::Native),
            "pure" => Ok(BackendPreference::Pure),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("unknown backend `{0}` (expected auto, native or pure)")]
    InvalidBackend(String),
}

/// Configuration for a `BoundaryAdapter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Pass/fail cutoff used when a call does not supply one.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Backend selection.
    #[serde(default)]
    pub backend: BackendPreference,

    /// Explicit path of the native module.
    #[serde(default)]
    pub library_path: Option<PathBuf>,

    /// Threads for batch statistics (0 = number of CPUs).
    #[serde(default)]
    pub batch_workers: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            backend: BackendPreference::default(),
            library_path: None,
            batch_workers: 0,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `GRADECORE_*` environment overrides. Unusable values are
    /// logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_LIBRARY).filter(|p| !p.trim().is_empty()) {
            self.library_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_BACKEND) {
            match raw.parse::<BackendPreference>() {
                Ok(backend) => self.backend = backend,
                Err(err) => tracing::warn!(var = ENV_BACKEND, %err, "ignoring override"),
            }
        }

        if let Some(raw) = lookup(ENV_THRESHOLD) {
            match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() => self.threshold = t,
                _ => tracing::warn!(var = ENV_THRESHOLD, value = %raw, "ignoring override"),
            }
        }

        self
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Path to try for the native module: the configured one, else the
    /// platform library name next to the running executable.
    pub fn resolve_library_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.library_path {
            return Some(path.clone());
        }
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join(library_file_name()))
    }

    /// Effective batch worker count.
    pub fn worker_count(&self) -> usize {
        if self.batch_workers == 0 {
            num_cpus::get()
        } else {
            self.batch_workers
        }
    }
}
