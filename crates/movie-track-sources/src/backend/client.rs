use async_trait::async_trait;
use movie_track_config::BackendConfig;
use movie_track_models::{MovieStatus, MovieUpdate, NewMovie, PersistedMovie};
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

use crate::backend::api;
use crate::error::SourceError;
use crate::http::create_http_client;
use crate::traits::MovieBackend;

/// Client for the local REST service that persists the user's lists.
#[derive(Clone)]
pub struct BackendClient {
    client: Arc<Client>,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(create_http_client()),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl MovieBackend for BackendClient {
    async fn list_movies(&self, status: MovieStatus) -> Result<Vec<PersistedMovie>, SourceError> {
        let result = api::list_movies(&self.client, &self.base_url, status).await;
        if let Err(e) = &result {
            error!(%status, error = %e, "Error fetching movies");
        }
        result
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<PersistedMovie, SourceError> {
        let result = api::create_movie(&self.client, &self.base_url, movie).await;
        match &result {
            Ok(created) => info!(id = created.id, catalog_id = created.catalog_id, status = %created.status, "Created movie"),
            Err(e) => error!(catalog_id = movie.tmdb_id, error = %e, "Error creating movie"),
        }
        result
    }

    async fn update_movie(&self, id: u64, update: &MovieUpdate) -> Result<PersistedMovie, SourceError> {
        let result = api::update_movie(&self.client, &self.base_url, id, update).await;
        if let Err(e) = &result {
            error!(id, error = %e, "Error updating movie");
        }
        result
    }

    async fn delete_movie(&self, id: u64) -> Result<(), SourceError> {
        let result = api::delete_movie(&self.client, &self.base_url, id).await;
        match &result {
            Ok(()) => info!(id, "Deleted movie"),
            Err(e) => error!(id, error = %e, "Error deleting movie"),
        }
        result
    }
}
