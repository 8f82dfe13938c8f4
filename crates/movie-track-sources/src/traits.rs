use async_trait::async_trait;
use chrono::NaiveDate;
use movie_track_models::{
    CatalogMovie, CatalogMovieDetails, MovieStatus, MovieUpdate, NewMovie, PersistedMovie,
};
use tracing::warn;

use crate::error::SourceError;

/// Read-only movie catalog (popular list, search, details).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn popular_movies(&self) -> Result<Vec<CatalogMovie>, SourceError>;

    /// A blank query returns the popular list.
    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, SourceError>;

    async fn movie_details(&self, id: u64) -> Result<CatalogMovieDetails, SourceError>;
}

/// Persistence for the user's watchlist and watched list.
#[async_trait]
pub trait MovieBackend: Send + Sync {
    async fn list_movies(&self, status: MovieStatus) -> Result<Vec<PersistedMovie>, SourceError>;
    async fn create_movie(&self, movie: &NewMovie) -> Result<PersistedMovie, SourceError>;
    async fn update_movie(&self, id: u64, update: &MovieUpdate) -> Result<PersistedMovie, SourceError>;
    async fn delete_movie(&self, id: u64) -> Result<(), SourceError>;

    /// Creates a watchlist entry. Failures (duplicates included) are logged and
    /// collapse to `None`; callers only learn that nothing was created.
    async fn add_to_watchlist(&self, movie: &CatalogMovie) -> Option<PersistedMovie> {
        let body = NewMovie::from_catalog(movie, MovieStatus::Watchlist, None);
        match self.create_movie(&body).await {
            Ok(created) => Some(created),
            Err(e) => {
                warn!(catalog_id = movie.id, error = %e, "Error adding to watchlist");
                None
            }
        }
    }

    /// Moves an existing record to watched, or creates a watched record.
    ///
    /// Unlike [`MovieBackend::add_to_watchlist`] the failure is returned and
    /// must be handled by the caller.
    async fn mark_as_watched(
        &self,
        movie: &CatalogMovie,
        existing: Option<&PersistedMovie>,
        today: NaiveDate,
    ) -> Result<PersistedMovie, SourceError> {
        let result = match existing {
            Some(existing) => self.update_movie(existing.id, &MovieUpdate::watched_on(today)).await,
            None => {
                let body = NewMovie::from_catalog(movie, MovieStatus::Watched, Some(today));
                self.create_movie(&body).await
            }
        };
        if let Err(e) = &result {
            warn!(catalog_id = movie.id, error = %e, "Error marking as watched");
        }
        result
    }
}
