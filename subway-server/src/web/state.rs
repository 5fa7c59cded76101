//! Application state for the web layer.

use std::sync::Arc;

use crate::fare::FeePolicy;
use crate::service::{LineService, StationService};
use crate::store::Store;

/// Shared application state.
///
/// Both services operate on the same store.
#[derive(Clone)]
pub struct AppState {
    /// Line management and fee computation
    pub lines: Arc<LineService>,

    /// Station registry
    pub stations: Arc<StationService>,
}

impl AppState {
    /// Create app state over `store`, computing fees with `policy`.
    pub fn new(store: Store, policy: FeePolicy) -> Self {
        Self {
            lines: Arc::new(LineService::new(store.clone(), policy)),
            stations: Arc::new(StationService::new(store)),
        }
    }
}
