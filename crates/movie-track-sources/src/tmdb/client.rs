use async_trait::async_trait;
use movie_track_config::CatalogConfig;
use movie_track_models::{CatalogMovie, CatalogMovieDetails};
use reqwest::Client;
use std::sync::Arc;
use tracing::warn;

use crate::error::SourceError;
use crate::http::create_http_client;
use crate::tmdb::api::{self, TmdbRequest};
use crate::traits::CatalogSource;

#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
    language: String,
}

impl TmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, language: impl Into<String>) -> Self {
        Self {
            client: Arc::new(create_http_client()),
            base_url: base_url.into(),
            api_key,
            language: language.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig, api_key: Option<String>) -> Self {
        Self::new(config.base_url.clone(), api_key, config.language.clone())
    }

    fn request(&self) -> Result<TmdbRequest<'_>, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        Ok(TmdbRequest {
            base_url: &self.base_url,
            api_key,
            language: &self.language,
        })
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn popular_movies(&self) -> Result<Vec<CatalogMovie>, SourceError> {
        let result = match self.request() {
            Ok(req) => api::get_popular(&self.client, &req).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(error = %e, "Error fetching popular movies");
        }
        result
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return self.popular_movies().await;
        }

        let result = match self.request() {
            Ok(req) => api::search(&self.client, &req, query).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(query, error = %e, "Error searching movies");
        }
        result
    }

    async fn movie_details(&self, id: u64) -> Result<CatalogMovieDetails, SourceError> {
        let result = match self.request() {
            Ok(req) => api::get_details(&self.client, &req, id).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(catalog_id = id, error = %e, "Error fetching movie details");
        }
        result
    }
}
