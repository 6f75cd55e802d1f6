//! Liveness probe for load balancers and container orchestration.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

pub fn routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
