//! Crunchyroll catalog client
//!
//! Pages through the browse endpoint with the account's bearer token.

use reqwest::Client as HttpClient;

use crate::{
    config::ImportConfig,
    error::{AppError, AppResult},
    import::CatalogSource,
    models::{BrowseItem, BrowseResponse},
};

#[derive(Clone)]
pub struct CrunchyrollClient {
    http_client: HttpClient,
    api_url: String,
    token: String,
    locale: String,
    audio_language: String,
}

impl CrunchyrollClient {
    pub fn new(token: String, locale: String, audio_language: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            token,
            locale,
            audio_language,
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(
            config.crunchyroll_token.clone(),
            config.crunchyroll_locale.clone(),
            config.crunchyroll_audio_language.clone(),
            config.crunchyroll_api_url.clone(),
        )
    }

    fn browse_url(&self) -> String {
        format!("{}/content/v2/discover/browse", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl CatalogSource for CrunchyrollClient {
    async fn fetch_page(&self, start: usize, quantity: usize) -> AppResult<Vec<BrowseItem>> {
        let response = self
            .http_client
            .get(self.browse_url())
            .bearer_auth(&self.token)
            .query(&[
                ("start", start.to_string()),
                ("n", quantity.to_string()),
                ("locale", self.locale.clone()),
                ("preferred_audio_language", self.audio_language.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Crunchyroll API returned status {}: {}",
                status, body
            )));
        }

        let page: BrowseResponse = response.json().await?;

        tracing::debug!(
            start = start,
            received = page.data.len(),
            source = "crunchyroll",
            "Browse page fetched"
        );

        Ok(page.data)
    }

    fn name(&self) -> &'static str {
        "crunchyroll"
    }
}
