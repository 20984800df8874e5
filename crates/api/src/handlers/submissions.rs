//! Handlers for the `/submissions` resource.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use jusho_core::{DocumentUpload, RuleConfig, Submission, ValidationResult};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Attached document metadata keyed by slot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DocumentsInput {
    pub document1: Option<DocumentUpload>,
    pub document2: Option<DocumentUpload>,
}

/// Request body for submission validation.
///
/// `fields` is the raw form map; unknown keys are ignored. Every part of the
/// body is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidateRequest {
    pub fields: HashMap<String, String>,
    pub documents: DocumentsInput,
    pub config: RuleConfig,
}

impl ValidateRequest {
    fn into_parts(self) -> (Submission, RuleConfig) {
        let mut submission = Submission::from_fields(self.fields);
        submission.document1 = self.documents.document1;
        submission.document2 = self.documents.document2;
        (submission, self.config)
    }
}

/// POST /api/v1/submissions/validate
///
/// Always `200 OK` for a well-formed body; rule failures are reported in
/// `data.errors`. A body that is not JSON of this shape is a `400`.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let Json(input) = payload?;
    let (submission, config) = input.into_parts();
    let result = state
        .validator
        .validate_with_reference(&submission, &config, state.matcher.as_ref())
        .await;

    if !result.passed {
        tracing::info!(
            failed_fields = result.errors.len(),
            "Submission failed validation"
        );
    }
    Ok(Json(DataResponse { data: result }))
}
