pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::AppState;

/// Full application router with the tracing and request timeout layers.
///
/// Used by the server and by integration tests that drive the router
/// without binding a socket.
pub fn create_app(state: AppState, request_timeout: std::time::Duration) -> axum::Router {
    use axum::http::StatusCode;
    use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

    routes::router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
