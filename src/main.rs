use std::sync::Arc;

use miso_soup_api::{
    config::Config,
    db::{self, PgAnimeRepository},
    routes::{create_router, AppState},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("miso_soup_api=info,tower_http=info");

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let state = AppState::new(Arc::new(PgAnimeRepository::new(pool)));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
