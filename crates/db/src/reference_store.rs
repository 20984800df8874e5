//! sqlx-backed implementation of the core reference lookup.

use async_trait::async_trait;
use jusho_core::reference::{
    CandidateRow, LookupResult, PostalMasterRecord, ReferenceError, ReferenceLookup,
};

use crate::repositories::{AddressMasterRepo, PostalMasterRepo};
use crate::DbPool;

/// Reads the master tables through a shared connection pool.
///
/// Every `sqlx::Error` surfaces as [`ReferenceError::Unavailable`]; deciding
/// what that means is left to the caller.
#[derive(Debug, Clone)]
pub struct PgReferenceStore {
    pool: DbPool,
}

impl PgReferenceStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn unavailable(err: sqlx::Error) -> ReferenceError {
    tracing::error!(error = %err, "Reference query failed");
    ReferenceError::Unavailable(err.to_string())
}

#[async_trait]
impl ReferenceLookup for PgReferenceStore {
    async fn lookup_by_postal_code(&self, code: &str) -> LookupResult<Option<PostalMasterRecord>> {
        let row = PostalMasterRepo::find_by_postal_code(&self.pool, code)
            .await
            .map_err(unavailable)?;
        Ok(row.map(PostalMasterRecord::from))
    }

    async fn lookup_candidates(
        &self,
        postal_code: &str,
        prefecture: &str,
    ) -> LookupResult<Vec<CandidateRow>> {
        let rows = AddressMasterRepo::list_candidates(&self.pool, postal_code, prefecture)
            .await
            .map_err(unavailable)?;
        Ok(rows.into_iter().map(CandidateRow::from).collect())
    }
}
