//! Catalog import
//!
//! Pulls series from an upstream catalog page by page and stores them through
//! an [`AnimeRepository`]. The import is sequential and pauses between pages to
//! stay under the upstream rate limit.

use std::time::Duration;

use crate::{
    db::AnimeRepository,
    error::{AppError, AppResult},
    models::{BrowseItem, NewAnime},
};

pub mod crunchyroll;

pub use crunchyroll::CrunchyrollClient;

/// Series requested per page
pub const PAGE_SIZE: usize = 50;

/// Pause between page requests
pub const PAGE_DELAY: Duration = Duration::from_secs(5);

/// Upstream catalog that can be read page by page
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches up to `quantity` series starting at offset `start`
    async fn fetch_page(&self, start: usize, quantity: usize) -> AppResult<Vec<BrowseItem>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Outcome of an import run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub pages: usize,
    pub saved: usize,
    pub duplicates: usize,
    pub failed: usize,
}

pub struct Importer<'a> {
    source: &'a dyn CatalogSource,
    repository: &'a dyn AnimeRepository,
    page_size: usize,
    page_delay: Duration,
}

impl<'a> Importer<'a> {
    pub fn new(source: &'a dyn CatalogSource, repository: &'a dyn AnimeRepository) -> Self {
        Self {
            source,
            repository,
            page_size: PAGE_SIZE,
            page_delay: PAGE_DELAY,
        }
    }

    /// Items requested per page, at least one
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Imports every page until the catalog is exhausted
    ///
    /// Stops on an empty page, on a short page, or on the first page-level
    /// error. Per-series failures are logged and skipped.
    pub async fn run(&self) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let mut page = 0;

        loop {
            let start = page * self.page_size;
            tracing::info!(
                page = page + 1,
                start = start,
                source = self.source.name(),
                "Fetching catalog page"
            );

            let items = match self.source.fetch_page(start, self.page_size).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!(page = page + 1, error = %e, "Catalog page fetch failed, stopping");
                    break;
                }
            };

            if items.is_empty() {
                tracing::info!("No more catalog data available");
                break;
            }

            summary.pages += 1;
            let received = items.len();

            for item in items {
                self.import_item(item, &mut summary).await;
            }

            tracing::info!(
                page = page + 1,
                received = received,
                total_saved = summary.saved,
                "Catalog page complete"
            );

            if received < self.page_size {
                tracing::info!("Reached end of catalog (last page was not full)");
                break;
            }

            page += 1;
            if !self.page_delay.is_zero() {
                tracing::debug!(delay_ms = self.page_delay.as_millis() as u64, "Waiting before next page");
                tokio::time::sleep(self.page_delay).await;
            }
        }

        tracing::info!(
            pages = summary.pages,
            saved = summary.saved,
            duplicates = summary.duplicates,
            failed = summary.failed,
            "Catalog import finished"
        );

        summary
    }

    async fn import_item(&self, item: BrowseItem, summary: &mut ImportSummary) {
        let label = item.label().to_string();
        let crunchyroll_id = item.id.clone();

        match self.repository.save(NewAnime::from(item)).await {
            Ok(anime) => {
                summary.saved += 1;
                tracing::debug!(title = %anime.title, crunchyroll_id = %crunchyroll_id, "Saved");
            }
            Err(AppError::Conflict(_)) => {
                summary.duplicates += 1;
                tracing::info!(title = %label, "Skipped duplicate");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(title = %label, error = %e, "Failed to save anime");
            }
        }
    }
}
