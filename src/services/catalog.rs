use crate::{
    db::AnimeRepository,
    error::{AppError, AppResult},
    models::{Anime, NewAnime},
};

/// Validates and stores a catalog entry
pub async fn save_anime(repository: &dyn AnimeRepository, anime: NewAnime) -> AppResult<Anime> {
    if anime.crunchyroll_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "crunchyrollId cannot be empty".to_string(),
        ));
    }
    if anime.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title cannot be empty".to_string()));
    }

    let saved = repository.save(anime).await?;

    tracing::debug!(
        id = saved.id,
        crunchyroll_id = %saved.crunchyroll_id,
        "Anime saved"
    );

    Ok(saved)
}

/// Returns the whole catalog
pub async fn list_anime(repository: &dyn AnimeRepository) -> AppResult<Vec<Anime>> {
    repository.fetch_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockAnimeRepository;
    use chrono::Utc;

    fn new_anime(crunchyroll_id: &str, title: &str) -> NewAnime {
        NewAnime {
            crunchyroll_id: crunchyroll_id.to_string(),
            title: title.to_string(),
            synopsis: None,
            genres: vec!["action".to_string()],
            keywords: vec![],
        }
    }

    #[tokio::test]
    async fn test_save_anime() {
        let mut repository = MockAnimeRepository::new();
        repository
            .expect_save()
            .withf(|anime| anime.crunchyroll_id == "GRDV0019R")
            .times(1)
            .returning(|anime| {
                Ok(Anime {
                    id: 1,
                    crunchyroll_id: anime.crunchyroll_id,
                    title: anime.title,
                    synopsis: anime.synopsis,
                    genres: anime.genres,
                    keywords: anime.keywords,
                    created_at: Utc::now(),
                })
            });

        let saved = save_anime(&repository, new_anime("GRDV0019R", "Cowboy Bebop"))
            .await
            .unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.title, "Cowboy Bebop");
    }

    #[tokio::test]
    async fn test_save_anime_rejects_blank_fields() {
        let mut repository = MockAnimeRepository::new();
        repository.expect_save().never();

        let blank_id = save_anime(&repository, new_anime(" ", "Cowboy Bebop")).await;
        assert!(matches!(blank_id, Err(AppError::InvalidInput(_))));

        let blank_title = save_anime(&repository, new_anime("GRDV0019R", "")).await;
        assert!(matches!(blank_title, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_save_anime_propagates_conflict() {
        let mut repository = MockAnimeRepository::new();
        repository
            .expect_save()
            .returning(|_| Err(AppError::Conflict("duplicate".to_string())));

        let result = save_anime(&repository, new_anime("GRDV0019R", "Cowboy Bebop")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
