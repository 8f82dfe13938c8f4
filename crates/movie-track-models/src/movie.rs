use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{release_year, CatalogMovie};
use crate::rating::PersonalRating;
use crate::status::MovieStatus;

/// A movie record owned by the local backend.
///
/// `id` is the backend's row id; `catalog_id` is the catalog (TMDB) id and is
/// what links a record to browse results. The store keeps one copy per status
/// bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedMovie {
    pub id: u64,
    #[serde(rename = "tmdb_id")]
    pub catalog_id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    pub status: MovieStatus,
    #[serde(default, deserialize_with = "crate::wire::optional_rating")]
    pub personal_rating: Option<PersonalRating>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::flag")]
    pub is_favorite: bool,
    #[serde(deserialize_with = "crate::wire::timestamp")]
    pub date_added: DateTime<Utc>,
    #[serde(default, deserialize_with = "crate::wire::optional_date")]
    pub date_watched: Option<NaiveDate>,
}

impl PersistedMovie {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(release_year)
    }

    pub fn is_watched(&self) -> bool {
        self.status == MovieStatus::Watched
    }
}

/// Body of `POST /movies`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMovie {
    pub tmdb_id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub status: MovieStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_watched: Option<NaiveDate>,
}

impl NewMovie {
    pub fn from_catalog(movie: &CatalogMovie, status: MovieStatus, date_watched: Option<NaiveDate>) -> Self {
        Self {
            tmdb_id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: Some(movie.release_date.clone()).filter(|d| !d.is_empty()),
            vote_average: Some(movie.vote_average),
            overview: Some(movie.overview.clone()),
            status,
            date_watched,
        }
    }
}

/// Body of `PUT /movies/{id}`; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_rating: Option<PersonalRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_watched: Option<NaiveDate>,
}

impl MovieUpdate {
    pub fn rating(rating: PersonalRating) -> Self {
        Self { personal_rating: Some(rating), ..Self::default() }
    }

    pub fn review(review: impl Into<String>) -> Self {
        Self { review: Some(review.into()), ..Self::default() }
    }

    pub fn favorite(is_favorite: bool) -> Self {
        Self { is_favorite: Some(is_favorite), ..Self::default() }
    }

    /// Moves a record to the watched list as of `date`.
    pub fn watched_on(date: NaiveDate) -> Self {
        Self {
            status: Some(MovieStatus::Watched),
            date_watched: Some(date),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend_row() -> serde_json::Value {
        json!({
            "id": 12,
            "tmdb_id": 550,
            "title": "Fight Club",
            "poster_path": "/poster.jpg",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "overview": "An insomniac office worker...",
            "status": "watched",
            "personal_rating": 4,
            "review": "Still holds up",
            "is_favorite": 1,
            "date_added": "2025-01-03 10:15:00",
            "date_watched": "2025-01-04"
        })
    }

    #[test]
    fn test_persisted_movie_from_backend_row() {
        let movie: PersistedMovie = serde_json::from_value(backend_row()).unwrap();
        assert_eq!(movie.id, 12);
        assert_eq!(movie.catalog_id, 550);
        assert_eq!(movie.status, MovieStatus::Watched);
        assert_eq!(movie.personal_rating.map(|r| r.get()), Some(4));
        assert!(movie.is_favorite);
        assert_eq!(movie.date_watched, NaiveDate::from_ymd_opt(2025, 1, 4));
        assert_eq!(movie.release_year(), Some(1999));
    }

    #[test]
    fn test_persisted_movie_unrated_and_not_favorite() {
        let mut row = backend_row();
        row["personal_rating"] = json!(0);
        row["is_favorite"] = json!(0);
        row["review"] = json!(null);
        row["date_watched"] = json!(null);
        let movie: PersistedMovie = serde_json::from_value(row).unwrap();
        assert_eq!(movie.personal_rating, None);
        assert!(!movie.is_favorite);
        assert_eq!(movie.review, None);
        assert_eq!(movie.date_watched, None);
    }

    #[test]
    fn test_persisted_movie_rejects_bad_rating() {
        let mut row = backend_row();
        row["personal_rating"] = json!(9);
        assert!(serde_json::from_value::<PersistedMovie>(row).is_err());
    }

    #[test]
    fn test_persisted_movie_survives_own_serialization() {
        let movie: PersistedMovie = serde_json::from_value(backend_row()).unwrap();
        let encoded = serde_json::to_value(&movie).unwrap();
        assert_eq!(encoded["tmdb_id"], json!(550));
        assert_eq!(encoded["is_favorite"], json!(true));
        let decoded: PersistedMovie = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, movie);
    }

    #[test]
    fn test_new_movie_body() {
        let movie = CatalogMovie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "Set in the 22nd century...".to_string(),
            poster_path: None,
            release_date: String::new(),
            vote_average: 8.2,
        };
        let body = serde_json::to_value(NewMovie::from_catalog(&movie, MovieStatus::Watchlist, None)).unwrap();
        assert_eq!(body["tmdb_id"], json!(603));
        assert_eq!(body["status"], json!("watchlist"));
        assert_eq!(body["release_date"], json!(null));
        assert!(body.get("date_watched").is_none());

        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let body = serde_json::to_value(NewMovie::from_catalog(&movie, MovieStatus::Watched, Some(date))).unwrap();
        assert_eq!(body["date_watched"], json!("2025-02-01"));
    }

    #[test]
    fn test_movie_update_only_sends_set_fields() {
        let body = serde_json::to_value(MovieUpdate::favorite(true)).unwrap();
        assert_eq!(body, json!({"is_favorite": true}));

        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let body = serde_json::to_value(MovieUpdate::watched_on(date)).unwrap();
        assert_eq!(body, json!({"status": "watched", "date_watched": "2025-02-01"}));
    }
}
