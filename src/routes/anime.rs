use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Anime, NewAnime, RecommendationRequest},
    routes::AppState,
    services::{catalog, recommendations},
};

/// Handler for the questionnaire recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Anime>>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let answers = request.answer_tokens();

    tracing::info!(
        request_id = %request_id,
        answer_count = answers.len(),
        "Processing recommendation request"
    );

    let recommendations =
        recommendations::get_recommendations(state.anime_repository.as_ref(), &answers)
            .await?;

    tracing::info!(
        request_id = %request_id,
        results = recommendations.len(),
        "Recommendation completed"
    );

    Ok(Json(recommendations))
}

/// Handler for adding a catalog entry
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewAnime>,
) -> AppResult<(StatusCode, Json<Anime>)> {
    let anime = catalog::save_anime(state.anime_repository.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(anime)))
}

/// Handler for listing the catalog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Anime>>> {
    let catalog = catalog::list_anime(state.anime_repository.as_ref()).await?;
    Ok(Json(catalog))
}
