//! Repository for the `postal_master` table.

use sqlx::PgPool;

use crate::models::master::PostalMasterRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "postal_code, prefecture, city_town";

/// Provides reads (and seeding writes) for the postal master.
pub struct PostalMasterRepo;

impl PostalMasterRepo {
    /// Find the canonical address for a 7-digit postal code.
    pub async fn find_by_postal_code(
        pool: &PgPool,
        postal_code: &str,
    ) -> Result<Option<PostalMasterRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM postal_master WHERE postal_code = $1 LIMIT 1");
        sqlx::query_as::<_, PostalMasterRow>(&query)
            .bind(postal_code)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the row for `postal_code`, returning the stored row.
    pub async fn upsert(
        pool: &PgPool,
        postal_code: &str,
        prefecture: &str,
        city_town: &str,
    ) -> Result<PostalMasterRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO postal_master (postal_code, prefecture, city_town)
             VALUES ($1, $2, $3)
             ON CONFLICT (postal_code) DO UPDATE
                SET prefecture = EXCLUDED.prefecture,
                    city_town = EXCLUDED.city_town
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PostalMasterRow>(&query)
            .bind(postal_code)
            .bind(prefecture)
            .bind(city_town)
            .fetch_one(pool)
            .await
    }
}
