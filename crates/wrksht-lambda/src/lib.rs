//! HTTP surface of the worksheet service.
//!
//! The binary wraps [`router`] in `lambda_http`; tests drive the same router
//! directly.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
///
/// `GET` on `/` or `/health` is an unauthenticated ping. `POST` on `/` or
/// `/worksheet` renders a worksheet and is guarded by [`middleware::auth`].
pub fn router(state: AppState) -> Router {
    let auth = axum_mw::from_fn_with_state(state.clone(), middleware::auth::require_auth);
    let render = || post(routes::worksheet::create_worksheet).route_layer(auth.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::ping::ping).merge(render()))
        .route("/health", get(routes::ping::ping))
        .route("/worksheet", render())
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
