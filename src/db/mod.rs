pub mod anime_repository;
pub mod postgres;

pub use anime_repository::{AnimeRepository, PgAnimeRepository};
pub use postgres::{create_pool, run_migrations};

#[cfg(test)]
pub use anime_repository::MockAnimeRepository;
