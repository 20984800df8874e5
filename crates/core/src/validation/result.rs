//! Validation output types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Keys under which rule failures are reported.
///
/// Variant order is the field declaration order; the error map iterates in
/// this order regardless of which rule fired first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    Kana,
    BirthDate,
    PostalCode,
    /// Prefecture, city/town and building share one key.
    Address,
    Tel,
    Email,
    /// Identity document, front side.
    Document1,
    /// Identity document, back side.
    Document2,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Kana => "kana",
            FieldKey::BirthDate => "birth_date",
            FieldKey::PostalCode => "postal_code",
            FieldKey::Address => "address",
            FieldKey::Tel => "tel",
            FieldKey::Email => "email",
            FieldKey::Document1 => "document1",
            FieldKey::Document2 => "document2",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one submission.
///
/// A field absent from `errors` passed. `passed` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub errors: BTreeMap<FieldKey, String>,
}

impl ValidationResult {
    pub fn from_errors(errors: BTreeMap<FieldKey, String>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
        }
    }

    /// The message recorded for `field`, if it failed.
    pub fn error(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Record a failure unless the field already has one.
    ///
    /// Returns `false` when an earlier message was kept.
    pub fn record(&mut self, field: FieldKey, message: impl Into<String>) -> bool {
        let inserted = match self.errors.entry(field) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(message.into());
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        };
        self.passed = self.errors.is_empty();
        inserted
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_errors(BTreeMap::new())
    }
}
