//! Per-call selection of optional rule groups.

use serde::{Deserialize, Serialize};

/// Which optional rule groups a validation call runs.
///
/// Every flag defaults to `false`, so an empty config runs the mandatory
/// field rules plus the birth-date group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Skip the birth-date group entirely (edit forms show it read-only).
    pub skip_birth_date: bool,
    /// Check the declared content type of attached identity documents.
    pub check_documents: bool,
    /// Cross-check postal code, prefecture and city/town against the
    /// address master. Only consulted by
    /// [`FieldValidator::validate_with_reference`](super::validator::FieldValidator::validate_with_reference).
    pub check_address_consistency: bool,
}

impl RuleConfig {
    /// Settings used by the record edit flow.
    pub fn for_edit() -> Self {
        Self {
            skip_birth_date: true,
            check_documents: true,
            check_address_consistency: false,
        }
    }
}
