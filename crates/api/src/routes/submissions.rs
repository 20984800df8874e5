//! Route definitions for the `/submissions` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST   /validate   -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(submissions::validate))
}
