use sea_orm::Database;
use tracing::info;

use campusfind_catalog::config::CatalogConfig;
use campusfind_catalog::infra::storage::FsImageStore;
use campusfind_catalog::router::build_router;
use campusfind_catalog::state::AppState;

#[tokio::main]
async fn main() {
    campusfind_core::tracing::init_tracing("catalog");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        image_store: FsImageStore::new(config.media_root),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
