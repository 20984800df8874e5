//! Repository for the `address_master` table.

use sqlx::PgPool;

use crate::models::master::{AddressMasterRow, CandidateRowRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, postal_code, prefecture, city, town";

/// Provides reads (and seeding writes) for the address master.
pub struct AddressMasterRepo;

impl AddressMasterRepo {
    /// List `{city, town}` rows for a `(postal_code, prefecture)` key, in
    /// insertion order. Sentinel and empty towns are returned as stored.
    pub async fn list_candidates(
        pool: &PgPool,
        postal_code: &str,
        prefecture: &str,
    ) -> Result<Vec<CandidateRowRecord>, sqlx::Error> {
        sqlx::query_as::<_, CandidateRowRecord>(
            "SELECT city, town FROM address_master \
             WHERE postal_code = $1 AND prefecture = $2 \
             ORDER BY id",
        )
        .bind(postal_code)
        .bind(prefecture)
        .fetch_all(pool)
        .await
    }

    /// Insert one address-master row, returning it.
    pub async fn create(
        pool: &PgPool,
        postal_code: &str,
        prefecture: &str,
        city: &str,
        town: &str,
    ) -> Result<AddressMasterRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO address_master (postal_code, prefecture, city, town)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AddressMasterRow>(&query)
            .bind(postal_code)
            .bind(prefecture)
            .bind(city)
            .bind(town)
            .fetch_one(pool)
            .await
    }
}
