//! Handlers for the `/address` resource.
//!
//! Both endpoints degrade instead of erroring when the master tables are
//! unreachable: search returns `null`, consistency returns `false`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use jusho_core::reference::PostalMasterRecord;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for postal-code search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub postal_code: Option<String>,
}

/// GET /api/v1/address/search?postal_code=X
///
/// Canonical prefecture and city/town for a postal code, or `null`.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Option<PostalMasterRecord>>>> {
    let Query(params) = params?;
    let code = params.postal_code.unwrap_or_default();
    let found = state.matcher.search_postal_address(&code).await;
    Ok(Json(DataResponse { data: found }))
}

/// Request body for an address consistency check.
#[derive(Debug, Deserialize)]
pub struct ConsistencyRequest {
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub prefecture: String,
    #[serde(default)]
    pub city_town: String,
}

/// Outcome of an address consistency check.
#[derive(Debug, Serialize)]
pub struct ConsistencyResponse {
    /// Normalized containment match against the address master.
    pub matches: bool,
    /// Byte-for-byte match against the postal master.
    pub exact: bool,
}

/// POST /api/v1/address/consistency
pub async fn consistency(
    State(state): State<AppState>,
    payload: Result<Json<ConsistencyRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<ConsistencyResponse>>> {
    let Json(input) = payload?;
    let (matches, exact) = tokio::join!(
        state
            .matcher
            .matches(&input.postal_code, &input.prefecture, &input.city_town),
        state
            .matcher
            .is_exact_match(&input.postal_code, &input.prefecture, &input.city_town),
    );
    Ok(Json(DataResponse {
        data: ConsistencyResponse { matches, exact },
    }))
}
