use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::{Anime, NewAnime},
};

/// Storage for the anime catalog
///
/// The recommendation pipeline only ever reads the whole catalog at once; writes
/// come from the import job and the catalog endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Returns every catalog entry, in insertion order
    async fn fetch_all(&self) -> AppResult<Vec<Anime>>;

    /// Inserts an entry, failing with [`AppError::Conflict`] if the Crunchyroll id exists
    async fn save(&self, anime: NewAnime) -> AppResult<Anime>;
}

/// PostgreSQL-backed catalog
#[derive(Clone)]
pub struct PgAnimeRepository {
    pool: PgPool,
}

impl PgAnimeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AnimeRepository for PgAnimeRepository {
    async fn fetch_all(&self) -> AppResult<Vec<Anime>> {
        let rows = sqlx::query_as::<_, Anime>(
            r#"
            SELECT id, crunchyroll_id, title, synopsis, genres, keywords, created_at
            FROM anime
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, anime: NewAnime) -> AppResult<Anime> {
        let crunchyroll_id = anime.crunchyroll_id.clone();

        sqlx::query_as::<_, Anime>(
            r#"
            INSERT INTO anime (crunchyroll_id, title, synopsis, genres, keywords)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, crunchyroll_id, title, synopsis, genres, keywords, created_at
            "#,
        )
        .bind(anime.crunchyroll_id)
        .bind(anime.title)
        .bind(anime.synopsis)
        .bind(anime.genres)
        .bind(anime.keywords)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                format!("Anime with Crunchyroll id {} already exists", crunchyroll_id),
            ),
            other => AppError::Database(other),
        })
    }
}
