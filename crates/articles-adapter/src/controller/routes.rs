//! Route table
//!
//! | Method | Path              | Auth   |
//! |--------|-------------------|--------|
//! | GET    | /v1/articles      | none   |
//! | GET    | /v1/articles/{id} | none   |
//! | POST   | /v1/articles      | bearer |
//! | PATCH  | /v1/articles/{id} | bearer |
//! | DELETE | /v1/articles/{id} | bearer |
//!
//! Any other method on these paths is 405, with or without a token.

use axum::routing::{get, patch, post};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use super::auth::require_bearer;
use super::handlers::{create_article, delete_article, get_article, list_articles, update_article};
use super::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/v1/articles", get(list_articles))
        .route("/v1/articles/{id}", get(get_article));

    // Layered per method router so that an unsupported method hits the
    // method router's 405 fallback instead of the gate.
    let auth = middleware::from_fn_with_state(state.api_token.clone(), require_bearer);
    let protected = Router::new()
        .route("/v1/articles", post(create_article).route_layer(auth.clone()))
        .route(
            "/v1/articles/{id}",
            patch(update_article)
                .delete(delete_article)
                .route_layer(auth),
        );

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
