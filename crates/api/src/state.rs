use std::sync::Arc;

use jusho_core::{FieldValidator, MasterMatcher};
use jusho_db::PgReferenceStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: jusho_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Address matcher over the master tables, bounded by `lookup_timeout_ms`.
    pub matcher: Arc<MasterMatcher<PgReferenceStore>>,
    /// Field validator; uses the local date unless pinned.
    pub validator: FieldValidator,
}

impl AppState {
    pub fn new(pool: jusho_db::DbPool, config: ServerConfig) -> Self {
        let matcher =
            MasterMatcher::new(PgReferenceStore::new(pool.clone())).with_timeout(config.lookup_timeout());
        Self {
            pool,
            config: Arc::new(config),
            matcher: Arc::new(matcher),
            validator: FieldValidator::new(),
        }
    }

    /// Replace the validator, e.g. to pin "today" in tests.
    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validator = validator;
        self
    }
}
