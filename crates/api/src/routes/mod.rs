pub mod address;
pub mod health;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /address/search                  postal-code lookup (GET ?postal_code=)
/// /address/consistency             address vs. master check (POST)
///
/// /submissions/validate            field validation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/address", address::router())
        .nest("/submissions", submissions::router())
}
