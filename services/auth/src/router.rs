use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use campusfind_core::health::{healthz, readyz};
use campusfind_core::middleware::request_id_layer;

use crate::handlers::{
    otp::{resend_otp, send_otp, verify_otp},
    session::{login, logout, register},
    user::{get_me, update_account, update_profile},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<AppState>))
        // OTP email verification
        .route("/api/auth/send-otp", post(send_otp))
        .route("/api/auth/resend-otp", post(resend_otp))
        .route("/api/auth/verify-otp", post(verify_otp))
        // Accounts & sessions
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        // Profile
        .route("/api/users/me", get(get_me))
        .route("/api/users/profile", put(update_profile))
        .route("/api/users/account", put(update_account))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
