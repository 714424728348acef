//! Process-wide adapter.
//!
//! The native module is loaded at most once per process: the first caller
//! builds the adapter under the write lock, everyone else shares the `Arc`.

use super::config::AdapterConfig;
use crate::adapter::BoundaryAdapter;
use std::sync::{Arc, PoisonError, RwLock};

static SHARED: RwLock<Option<Arc<BoundaryAdapter>>> = RwLock::new(None);

/// Get the shared adapter, building it from the environment on first use.
pub fn shared_adapter() -> Arc<BoundaryAdapter> {
    get_or_init(|| BoundaryAdapter::from_config(&AdapterConfig::from_env()))
}

/// Install the shared adapter at startup from explicit configuration.
///
/// Returns the adapter in effect. If one is already installed it is kept
/// and `config` is ignored.
pub fn install_adapter(config: &AdapterConfig) -> Arc<BoundaryAdapter> {
    get_or_init(|| BoundaryAdapter::from_config(config))
}

/// Whether an adapter has been installed.
pub fn is_initialized() -> bool {
    SHARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Drop the shared adapter so the next call rebuilds it.
///
/// Only meant for test isolation; callers holding the old `Arc` keep using it.
#[doc(hidden)]
pub fn reset_adapter() {
    *SHARED.write().unwrap_or_else(PoisonError::into_inner) = None;
}

fn get_or_init(init: impl FnOnce() -> BoundaryAdapter) -> Arc<BoundaryAdapter> {
    if let Some(adapter) = SHARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Arc::clone(adapter);
    }

    let mut slot = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race between the two locks.
    if let Some(adapter) = slot.as_ref() {
        return Arc::clone(adapter);
    }

    let adapter = Arc::new(init());
    tracing::debug!(primary = adapter.primary_kind().name(), "initialized shared adapter");
    *slot = Some(Arc::clone(&adapter));
    adapter
}
