//! Postal master and address master rows.

use jusho_core::reference::{AddressMasterRecord, CandidateRow, PostalMasterRecord};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `postal_master` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostalMasterRow {
    pub postal_code: String,
    pub prefecture: String,
    pub city_town: String,
}

impl From<PostalMasterRow> for PostalMasterRecord {
    fn from(row: PostalMasterRow) -> Self {
        Self {
            postal_code: row.postal_code,
            prefecture: row.prefecture,
            city_town: row.city_town,
        }
    }
}

/// A row from the `address_master` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AddressMasterRow {
    pub id: i64,
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    /// May be empty or the "no sub-listing" sentinel.
    pub town: String,
}

impl From<AddressMasterRow> for AddressMasterRecord {
    fn from(row: AddressMasterRow) -> Self {
        Self {
            postal_code: row.postal_code,
            prefecture: row.prefecture,
            city: row.city,
            town: row.town,
        }
    }
}

/// The `{city, town}` projection used for candidate matching.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRowRecord {
    pub city: String,
    pub town: String,
}

impl From<CandidateRowRecord> for CandidateRow {
    fn from(row: CandidateRowRecord) -> Self {
        Self {
            city: row.city,
            town: row.town,
        }
    }
}
