use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod personality;

pub use personality::{Energy, Judgment, Lifestyle, Perception, PersonalityType};

/// An anime title in the recommendation catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub id: i64,
    /// Identifier in the upstream Crunchyroll catalog (unique)
    pub crunchyroll_id: String,
    pub title: String,
    pub synopsis: Option<String>,
    /// Genre tags, e.g. `["action", "drama"]`
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Catalog entry to be inserted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAnime {
    pub crunchyroll_id: String,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Questionnaire submission
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    /// Ten answers, `"0"` or `"1"`, in question order
    pub answers: Vec<serde_json::Value>,
}

impl RecommendationRequest {
    /// Answers as string tokens; `1` and `"1"` both become `"1"`
    ///
    /// Anything that is neither a string nor a number becomes an empty token,
    /// which votes for the first letter of its axis.
    pub fn answer_tokens(&self) -> Vec<String> {
        self.answers
            .iter()
            .map(|answer| match answer {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => String::new(),
            })
            .collect()
    }
}

// ============================================================================
// Crunchyroll API Types
// ============================================================================

/// Raw response from the Crunchyroll browse endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseResponse {
    #[serde(default)]
    pub data: Vec<BrowseItem>,
}

/// A single series as returned by the browse endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BrowseItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub localization: Option<BrowseLocalization>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BrowseLocalization {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

impl BrowseItem {
    /// Display name for logging, falling back to the id
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

impl From<BrowseItem> for NewAnime {
    fn from(item: BrowseItem) -> Self {
        let localization = item.localization.as_ref();

        let title = non_empty(item.title.as_ref())
            .or_else(|| non_empty(localization.and_then(|l| l.title.as_ref())))
            .unwrap_or_else(|| "Unknown Title".to_string());

        let synopsis = non_empty(item.description.as_ref())
            .or_else(|| non_empty(localization.and_then(|l| l.description.as_ref())))
            .unwrap_or_default();

        NewAnime {
            crunchyroll_id: item.id,
            title,
            synopsis: Some(synopsis),
            genres: item.categories,
            keywords: Vec::new(),
        }
    }
}
