//! Address consistency and field validation core.
//!
//! Pure domain logic with no database dependency: text normalization for
//! free-form Japanese address input, master-data matching against a
//! pluggable reference store, and the per-field submission validator.

pub mod matcher;
pub mod normalize;
pub mod reference;
pub mod validation;

pub use matcher::MasterMatcher;
pub use normalize::{normalize, normalize_postal_code, NormalizedString};
pub use reference::{LookupResult, ReferenceError, ReferenceLookup};
pub use validation::config::RuleConfig;
pub use validation::result::{FieldKey, ValidationResult};
pub use validation::submission::{DocumentUpload, Submission};
pub use validation::validator::{validate_submission, FieldValidator};
