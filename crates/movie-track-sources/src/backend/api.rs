use movie_track_models::{MovieStatus, MovieUpdate, NewMovie, PersistedMovie};
use reqwest::Client;
use tracing::debug;

use crate::error::SourceError;
use crate::http::{read_json, send};

fn movies_url(base_url: &str) -> String {
    format!("{}/movies", base_url.trim_end_matches('/'))
}

fn movie_url(base_url: &str, id: u64) -> String {
    format!("{}/{}", movies_url(base_url), id)
}

/// `GET /movies?status=...`
pub async fn list_movies(client: &Client, base_url: &str, status: MovieStatus) -> Result<Vec<PersistedMovie>, SourceError> {
    let endpoint = format!("GET /movies?status={}", status);
    let url = format!("{}?status={}", movies_url(base_url), status);
    let response = send(client.get(&url), &endpoint).await?;
    let movies: Vec<PersistedMovie> = read_json(response, &endpoint).await?;
    debug!(%status, count = movies.len(), "Fetched movies from backend");
    Ok(movies)
}

/// `POST /movies`
pub async fn create_movie(client: &Client, base_url: &str, movie: &NewMovie) -> Result<PersistedMovie, SourceError> {
    let endpoint = "POST /movies";
    let response = send(client.post(movies_url(base_url)).json(movie), endpoint).await?;
    read_json(response, endpoint).await
}

/// `PUT /movies/{id}` with only the changed fields
pub async fn update_movie(client: &Client, base_url: &str, id: u64, update: &MovieUpdate) -> Result<PersistedMovie, SourceError> {
    let endpoint = format!("PUT /movies/{}", id);
    let response = send(client.put(movie_url(base_url, id)).json(update), &endpoint).await?;
    read_json(response, &endpoint).await
}

/// `DELETE /movies/{id}`; the response body is ignored.
pub async fn delete_movie(client: &Client, base_url: &str, id: u64) -> Result<(), SourceError> {
    let endpoint = format!("DELETE /movies/{}", id);
    send(client.delete(movie_url(base_url, id)), &endpoint).await?;
    Ok(())
}
