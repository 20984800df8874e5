//! Runs the field rule chains over a submission.

use chrono::NaiveDate;

use super::config::RuleConfig;
use super::result::{FieldKey, ValidationResult};
use super::rules::{self, messages};
use super::submission::Submission;
use crate::matcher::MasterMatcher;
use crate::reference::ReferenceLookup;

/// Validates submissions field by field in declaration order.
///
/// Stateless apart from the reference date used by the birth-date rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator {
    today: Option<NaiveDate>,
}

impl FieldValidator {
    /// A validator that compares birth dates against the local calendar date.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// A validator pinned to a fixed "today".
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Evaluate every enabled rule group against `submission`.
    ///
    /// At most one message is recorded per field: the first failing
    /// condition of its chain.
    pub fn validate(&self, submission: &Submission, config: &RuleConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let mut check = |field: FieldKey, outcome: Option<&'static str>| {
            if let Some(message) = outcome {
                result.record(field, message);
            }
        };

        check(FieldKey::Name, rules::check_name(submission.name.as_deref()));
        check(FieldKey::Kana, rules::check_kana(submission.kana.as_deref()));

        if !config.skip_birth_date {
            check(
                FieldKey::BirthDate,
                rules::check_birth_date(
                    submission.birth_year.as_deref(),
                    submission.birth_month.as_deref(),
                    submission.birth_day.as_deref(),
                    self.today(),
                ),
            );
        }

        check(
            FieldKey::PostalCode,
            rules::check_postal_code(submission.postal_code.as_deref()),
        );
        check(
            FieldKey::Address,
            rules::check_address(
                submission.prefecture.as_deref(),
                submission.city_town.as_deref(),
                submission.building.as_deref(),
            ),
        );
        check(FieldKey::Tel, rules::check_tel(submission.tel.as_deref()));
        check(FieldKey::Email, rules::check_email(submission.email.as_deref()));

        if config.check_documents {
            check(
                FieldKey::Document1,
                rules::check_document(submission.document1.as_ref(), messages::DOCUMENT1_TYPE),
            );
            check(
                FieldKey::Document2,
                rules::check_document(submission.document2.as_ref(), messages::DOCUMENT2_TYPE),
            );
        }

        tracing::debug!(
            passed = result.passed,
            error_count = result.errors.len(),
            "Submission validated"
        );
        result
    }

    /// [`validate`](Self::validate), plus the address-consistency group when
    /// `config.check_address_consistency` is set.
    ///
    /// The master data is consulted only when the postal code and address
    /// fields passed their own rules. A negative or failed lookup is recorded
    /// under [`FieldKey::Address`].
    pub async fn validate_with_reference<L: ReferenceLookup>(
        &self,
        submission: &Submission,
        config: &RuleConfig,
        matcher: &MasterMatcher<L>,
    ) -> ValidationResult {
        let mut result = self.validate(submission, config);
        if !config.check_address_consistency
            || result.error(FieldKey::PostalCode).is_some()
            || result.error(FieldKey::Address).is_some()
        {
            return result;
        }

        let postal_code = submission.postal_code.as_deref().unwrap_or_default();
        let prefecture = submission.prefecture.as_deref().unwrap_or_default();
        let city_town = submission.city_town.as_deref().unwrap_or_default();

        if !matcher.matches(postal_code, prefecture, city_town).await {
            result.record(FieldKey::Address, messages::ADDRESS_MISMATCH);
        }
        result
    }
}

/// Validate a submission against the current local date.
pub fn validate_submission(submission: &Submission, config: &RuleConfig) -> ValidationResult {
    FieldValidator::new().validate(submission, config)
}
