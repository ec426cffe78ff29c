use sea_orm::Database;
use tracing::info;

use campusfind_auth::config::AuthConfig;
use campusfind_auth::router::build_router;
use campusfind_auth::state::AppState;

#[tokio::main]
async fn main() {
    campusfind_core::tracing::init_tracing("auth");

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        email_domain: config.email_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
