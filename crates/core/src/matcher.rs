//! Address consistency check against the master tables.
//!
//! Confirmation is advisory: any failure to read reference data, including a
//! timeout, yields a negative result instead of an error.

use std::future::Future;
use std::time::Duration;

use crate::normalize::{normalize, normalize_postal_code, NormalizedString};
use crate::reference::{
    CandidateRow, LookupResult, PostalMasterRecord, ReferenceError, ReferenceLookup, SENTINEL_TOWN,
};

/// Lookup deadline used when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Matches user-entered addresses against a [`ReferenceLookup`].
///
/// Holds no mutable state; one instance may serve concurrent calls.
#[derive(Debug, Clone)]
pub struct MasterMatcher<L> {
    lookup: L,
    timeout: Duration,
}

impl<L: ReferenceLookup> MasterMatcher<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Whether `city_town` plausibly belongs to the postal code and prefecture.
    ///
    /// Candidates come from the address master keyed by the normalized postal
    /// code and prefecture. Sentinel and empty town rows are skipped. A
    /// candidate matches when either it or the normalized input contains the
    /// other.
    pub async fn matches(&self, postal_code: &str, prefecture: &str, city_town: &str) -> bool {
        let code = normalize_postal_code(postal_code);
        let pref = normalize(prefecture);
        let input = normalize(city_town);

        let rows = match self
            .bounded(self.lookup.lookup_candidates(&code, pref.as_str()))
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(
                    postal_code = %code,
                    error = %err,
                    "Candidate lookup failed, treating as no match"
                );
                return false;
            }
        };

        let matched = match_candidates(&input, &rows);
        tracing::debug!(
            postal_code = %code,
            candidates = rows.len(),
            matched,
            "Address consistency evaluated"
        );
        matched
    }

    /// Strict equality against the postal master, without normalization.
    pub async fn is_exact_match(&self, postal_code: &str, prefecture: &str, city_town: &str) -> bool {
        match self
            .bounded(self.lookup.lookup_by_postal_code(postal_code))
            .await
        {
            Ok(Some(record)) => record.prefecture == prefecture && record.city_town == city_town,
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(postal_code = %postal_code, error = %err, "Postal lookup failed, treating as no match");
                false
            }
        }
    }

    /// Canonical prefecture and city/town for a user-typed postal code.
    ///
    /// Returns `None` for an empty code, an unknown code, or a failed lookup.
    pub async fn search_postal_address(&self, postal_code: &str) -> Option<PostalMasterRecord> {
        let code = normalize_postal_code(postal_code);
        if code.is_empty() {
            return None;
        }
        match self.bounded(self.lookup.lookup_by_postal_code(&code)).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(postal_code = %code, error = %err, "Postal search failed");
                None
            }
        }
    }

    async fn bounded<T, F>(&self, lookup: F) -> LookupResult<T>
    where
        F: Future<Output = LookupResult<T>>,
    {
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_) => Err(ReferenceError::Timeout(self.timeout)),
        }
    }
}

/// Normalized `city + town` for a row eligible for matching.
///
/// Rows whose normalized town is empty or the sentinel value are excluded.
pub fn candidate_address(row: &CandidateRow) -> Option<NormalizedString> {
    let town = normalize(&row.town);
    if town.is_empty() || town == normalize(SENTINEL_TOWN) {
        return None;
    }
    Some(normalize(&row.city).concat(&town))
}

/// Bidirectional containment test, short-circuiting on the first match.
pub fn match_candidates(input: &NormalizedString, rows: &[CandidateRow]) -> bool {
    rows.iter()
        .filter_map(candidate_address)
        .any(|candidate| input.contains(&candidate) || candidate.contains(input))
}
