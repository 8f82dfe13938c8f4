use movie_track_models::{CatalogMovie, CatalogMovieDetails};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::SourceError;
use crate::http::{read_json, send};

#[derive(Debug, Deserialize)]
struct TmdbMovieList {
    results: Vec<CatalogMovie>,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    total_pages: u32,
}

/// Connection settings for one catalog request.
pub struct TmdbRequest<'a> {
    pub base_url: &'a str,
    pub api_key: &'a str,
    pub language: &'a str,
}

impl TmdbRequest<'_> {
    fn url(&self, path: &str, extra_query: &str) -> String {
        format!(
            "{}/{}?api_key={}&language={}{}",
            self.base_url.trim_end_matches('/'),
            path,
            urlencoding::encode(self.api_key),
            urlencoding::encode(self.language),
            extra_query
        )
    }
}

/// Fetch the first page of popular movies
pub async fn get_popular(client: &Client, req: &TmdbRequest<'_>) -> Result<Vec<CatalogMovie>, SourceError> {
    let endpoint = "movie/popular";
    let response = send(client.get(req.url(endpoint, "&page=1")), endpoint).await?;
    let list: TmdbMovieList = read_json(response, endpoint).await?;
    debug!(page = list.page, total_pages = list.total_pages, count = list.results.len(), "Fetched popular movies");
    Ok(list.results)
}

/// Fetch the first page of movies matching `query`
pub async fn search(client: &Client, req: &TmdbRequest<'_>, query: &str) -> Result<Vec<CatalogMovie>, SourceError> {
    let endpoint = "search/movie";
    let extra = format!("&query={}&page=1", urlencoding::encode(query));
    let response = send(client.get(req.url(endpoint, &extra)), endpoint).await?;
    let list: TmdbMovieList = read_json(response, endpoint).await?;
    debug!(query, total_pages = list.total_pages, count = list.results.len(), "Searched movies");
    Ok(list.results)
}

pub async fn get_details(client: &Client, req: &TmdbRequest<'_>, id: u64) -> Result<CatalogMovieDetails, SourceError> {
    let endpoint = format!("movie/{}", id);
    let response = send(client.get(req.url(&endpoint, "")), &endpoint).await?;
    read_json(response, &endpoint).await
}
