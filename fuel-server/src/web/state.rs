//! Application state for the web layer.

use crate::store::StationStore;

/// Shared application state.
///
/// Handlers reach the station collection only through this store handle.
#[derive(Clone)]
pub struct AppState {
    /// Station store (internally reference-counted and locked)
    pub store: StationStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: StationStore) -> Self {
        Self { store }
    }
}
