use std::future::Future;

use axum::extract::State;
use axum::http::StatusCode;

/// Dependency probe backing `GET /readyz`. Each service answers for the
/// dependencies it actually holds; both services ping their database
/// connection.
pub trait ReadinessProbe {
    fn is_ready(&self) -> impl Future<Output = bool> + Send;
}

/// Handler for `GET /healthz`. 200 means the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. 503 until the service's dependencies answer,
/// so a load balancer holds traffic during startup and database outages.
pub async fn readyz<S>(State(state): State<S>) -> StatusCode
where
    S: ReadinessProbe + Clone + Send + Sync + 'static,
{
    if state.is_ready().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
