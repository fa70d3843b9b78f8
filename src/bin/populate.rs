//! Populates the anime catalog from Crunchyroll.
//!
//! Requires `CRUNCHYROLL_TOKEN`; see `ImportConfig` for the other variables.

use miso_soup_api::{
    config::ImportConfig,
    db::{self, PgAnimeRepository},
    import::{CrunchyrollClient, Importer},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("miso_soup_api=info,populate=info");

    let config = ImportConfig::from_env()?;
    tracing::info!(
        locale = %config.crunchyroll_locale,
        audio_language = %config.crunchyroll_audio_language,
        "Starting anime catalog population"
    );

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let repository = PgAnimeRepository::new(pool.clone());
    let source = CrunchyrollClient::from_config(&config);

    let summary = Importer::new(&source, &repository).run().await;

    tracing::info!(
        saved = summary.saved,
        duplicates = summary.duplicates,
        failed = summary.failed,
        "Population complete"
    );

    pool.close().await;
    Ok(())
}
