/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Root directory for stored item images (default "./media").
    /// Env var: `MEDIA_ROOT`.
    pub media_root: String,
    /// TCP port to listen on (default 3102). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_owned()),
            catalog_port: std::env::var("CATALOG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3102),
        }
    }
}
