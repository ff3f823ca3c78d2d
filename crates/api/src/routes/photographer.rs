//! Route definitions for the `/photographer` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::photographer;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET    /photographer             -> list (always 501)
/// POST   /photographer             -> create
/// GET    /photographer/{username}  -> get_by_username
/// PUT    /photographer/{username}  -> update
/// DELETE /photographer/{username}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/photographer",
            get(photographer::list).post(photographer::create),
        )
        .route(
            "/photographer/{username}",
            get(photographer::get_by_username)
                .put(photographer::update)
                .delete(photographer::delete),
        )
}
