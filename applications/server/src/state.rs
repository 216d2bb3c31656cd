/// Shared application state
use songbook_core::SongStore;
use songbook_lookup::LookupClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn SongStore>,
    pub lookup: Arc<LookupClient>,
}

impl AppState {
    pub fn new(db: Arc<dyn SongStore>, lookup: Arc<LookupClient>) -> Self {
        Self { db, lookup }
    }
}
