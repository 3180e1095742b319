//! diagnost-api library root.
//!
//! Exposes the router and its building blocks so that integration tests
//! can drive the HTTP surface in-process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use diagnost_inference::client::Summarizer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router<S: Summarizer + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/analyze", post(routes::analyze::analyze::<S>))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(axum_mw::from_fn(middleware::trace::trace_request))
        .layer(cors)
        .with_state(state)
}
