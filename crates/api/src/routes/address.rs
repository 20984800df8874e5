//! Route definitions for the `/address` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::address;
use crate::state::AppState;

/// Routes mounted at `/address`.
///
/// ```text
/// GET    /search        -> search        (?postal_code)
/// POST   /consistency   -> consistency
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(address::search))
        .route("/consistency", post(address::consistency))
}
