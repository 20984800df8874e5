//! Read-only access to the postal and address master tables.
//!
//! The core never owns reference data. Callers supply an implementation of
//! [`ReferenceLookup`]; every read returns a [`LookupResult`] so the matcher
//! can decide explicitly what a failed lookup means.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Town value meaning "no further listing exists below this level".
pub const SENTINEL_TOWN: &str = "以下に掲載がない場合";

/// One canonical address per postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalMasterRecord {
    pub postal_code: String,
    pub prefecture: String,
    pub city_town: String,
}

/// A finer-grained row of the address master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressMasterRecord {
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
}

/// The `{city, town}` projection returned by candidate lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub city: String,
    pub town: String,
}

impl From<&AddressMasterRecord> for CandidateRow {
    fn from(record: &AddressMasterRecord) -> Self {
        Self {
            city: record.city.clone(),
            town: record.town.clone(),
        }
    }
}

/// Why a reference lookup did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("reference store unavailable: {0}")]
    Unavailable(String),

    #[error("reference lookup timed out after {0:?}")]
    Timeout(Duration),
}

pub type LookupResult<T> = Result<T, ReferenceError>;

/// Read interface over the postal/address master tables.
#[async_trait]
pub trait ReferenceLookup: Send + Sync + 'static {
    /// The postal-master row for an exact postal code, if any.
    async fn lookup_by_postal_code(&self, code: &str) -> LookupResult<Option<PostalMasterRecord>>;

    /// Address-master rows whose `(postal_code, prefecture)` equals the key.
    async fn lookup_candidates(
        &self,
        postal_code: &str,
        prefecture: &str,
    ) -> LookupResult<Vec<CandidateRow>>;
}

/// Reference data held in memory, keyed the same way the master tables are.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReference {
    postal: HashMap<String, PostalMasterRecord>,
    addresses: HashMap<(String, String), Vec<CandidateRow>>,
}

impl InMemoryReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_postal(mut self, record: PostalMasterRecord) -> Self {
        self.postal.insert(record.postal_code.clone(), record);
        self
    }

    pub fn with_address(mut self, record: AddressMasterRecord) -> Self {
        self.addresses
            .entry((record.postal_code.clone(), record.prefecture.clone()))
            .or_default()
            .push(CandidateRow::from(&record));
        self
    }
}

#[async_trait]
impl ReferenceLookup for InMemoryReference {
    async fn lookup_by_postal_code(&self, code: &str) -> LookupResult<Option<PostalMasterRecord>> {
        Ok(self.postal.get(code).cloned())
    }

    async fn lookup_candidates(
        &self,
        postal_code: &str,
        prefecture: &str,
    ) -> LookupResult<Vec<CandidateRow>> {
        Ok(self
            .addresses
            .get(&(postal_code.to_string(), prefecture.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
