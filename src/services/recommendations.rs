use crate::{
    db::AnimeRepository,
    error::AppResult,
    models::Anime,
    services::{keywords, personality, ranker},
};

/// Generates anime recommendations from questionnaire answers
///
/// Answers are classified into a personality type, the type is mapped to its
/// keywords, and the full catalog is ranked against those keywords. Only a
/// wrong number of answers is an error; anything else that finds no match
/// yields an empty list.
pub async fn get_recommendations(
    repository: &dyn AnimeRepository,
    answers: &[String],
) -> AppResult<Vec<Anime>> {
    let personality = personality::classify(answers)?;
    let keywords = keywords::keywords_for(personality);

    tracing::info!(
        personality = %personality,
        keyword_count = keywords.len(),
        "Answers classified"
    );

    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let catalog = repository.fetch_all().await?;
    let recommendations: Vec<Anime> = ranker::rank(keywords, &catalog)
        .into_iter()
        .cloned()
        .collect();

    tracing::info!(
        personality = %personality,
        catalog_size = catalog.len(),
        results = recommendations.len(),
        "Recommendations ranked"
    );

    Ok(recommendations)
}
