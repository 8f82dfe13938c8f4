//! In-memory stand-ins for the catalog and the backend.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use movie_track_models::{
    CatalogMovie, CatalogMovieDetails, MovieStatus, MovieUpdate, NewMovie, PersistedMovie,
};
use movie_track_sources::{CatalogSource, MovieBackend, SourceError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::alert::AlertSink;

pub fn catalog_movie(id: u64, title: &str) -> CatalogMovie {
    CatalogMovie {
        id,
        title: title.to_string(),
        overview: format!("{} overview", title),
        poster_path: Some(format!("/{}.jpg", id)),
        release_date: "2014-11-05".to_string(),
        vote_average: 8.1,
    }
}

fn unavailable(endpoint: &str) -> SourceError {
    SourceError::status(endpoint, 503, "service unavailable")
}

#[derive(Default)]
pub struct FakeCatalog {
    movies: Vec<CatalogMovie>,
    failing: AtomicBool,
    details_delay: Mutex<HashMap<u64, Duration>>,
}

impl FakeCatalog {
    pub fn with_movies(movies: Vec<CatalogMovie>) -> Self {
        Self { movies, ..Self::default() }
    }

    /// Makes the details fetch for `id` resolve only after `delay`.
    pub fn delay_details(&self, id: u64, delay: Duration) {
        self.details_delay.lock().unwrap().insert(id, delay);
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self, endpoint: &str) -> Result<(), SourceError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable(endpoint))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn popular_movies(&self) -> Result<Vec<CatalogMovie>, SourceError> {
        self.check("movie/popular")?;
        Ok(self.movies.clone())
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, SourceError> {
        if query.trim().is_empty() {
            return self.popular_movies().await;
        }
        self.check("search/movie")?;
        let needle = query.to_lowercase();
        Ok(self
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn movie_details(&self, id: u64) -> Result<CatalogMovieDetails, SourceError> {
        let delay = self.details_delay.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check("movie/{id}")?;
        let movie = self
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| SourceError::status(format!("movie/{}", id), 404, "not found"))?;
        Ok(CatalogMovieDetails {
            movie,
            runtime: Some(148),
            genres: Vec::new(),
            tagline: None,
            backdrop_path: None,
        })
    }
}

/// Backend with the same uniqueness rule as the real one: one record per
/// catalog id.
#[derive(Default)]
pub struct FakeBackend {
    rows: Mutex<Vec<PersistedMovie>>,
    next_id: AtomicU64,
    creates: AtomicUsize,
    failing: AtomicBool,
}

impl FakeBackend {
    pub fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn created(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn seed(&self, movie: CatalogMovie, status: MovieStatus) {
        let row = self.insert(&NewMovie::from_catalog(&movie, status, None));
        self.rows.lock().unwrap().push(row);
    }

    fn insert(&self, movie: &NewMovie) -> PersistedMovie {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        PersistedMovie {
            id,
            catalog_id: movie.tmdb_id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            overview: movie.overview.clone(),
            status: movie.status,
            personal_rating: None,
            review: None,
            is_favorite: false,
            date_added: Utc.with_ymd_and_hms(2025, 1, 3, 10, 15, 0).unwrap(),
            date_watched: movie.date_watched,
        }
    }

    fn check(&self, endpoint: &str) -> Result<(), SourceError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable(endpoint))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MovieBackend for FakeBackend {
    async fn list_movies(&self, status: MovieStatus) -> Result<Vec<PersistedMovie>, SourceError> {
        self.check("GET /movies")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|m| m.status == status).cloned().collect())
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<PersistedMovie, SourceError> {
        self.check("POST /movies")?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|m| m.catalog_id == movie.tmdb_id) {
            return Err(SourceError::Rejected("Movie already exists".to_string()));
        }
        let row = self.insert(movie);
        rows.push(row.clone());
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(row)
    }

    async fn update_movie(&self, id: u64, update: &MovieUpdate) -> Result<PersistedMovie, SourceError> {
        self.check("PUT /movies/{id}")?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| SourceError::status(format!("PUT /movies/{}", id), 404, "Movie not found"))?;
        if let Some(status) = update.status {
            row.status = status;
        }
        if let Some(rating) = update.personal_rating {
            row.personal_rating = Some(rating);
        }
        if let Some(review) = &update.review {
            row.review = Some(review.clone());
        }
        if let Some(favorite) = update.is_favorite {
            row.is_favorite = favorite;
        }
        if let Some(date) = update.date_watched {
            row.date_watched = Some(date);
        }
        Ok(row.clone())
    }

    async fn delete_movie(&self, id: u64) -> Result<(), SourceError> {
        self.check("DELETE /movies/{id}")?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(SourceError::Rejected("Movie not found".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
