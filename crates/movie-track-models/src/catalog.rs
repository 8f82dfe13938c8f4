use serde::{Deserialize, Serialize};

/// A movie as listed by the catalog API (popular list, search results).
///
/// Never persisted; identity is the catalog's movie id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::string_or_null")]
    pub release_date: String, // "YYYY-MM-DD", empty for unreleased titles
    #[serde(default)]
    pub vote_average: f64,
}

impl CatalogMovie {
    pub fn release_year(&self) -> Option<i32> {
        release_year(&self.release_date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full catalog record, fetched lazily when a detail view is opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovieDetails {
    #[serde(flatten)]
    pub movie: CatalogMovie,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl CatalogMovieDetails {
    pub fn as_catalog_movie(&self) -> CatalogMovie {
        self.movie.clone()
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}

pub(crate) fn release_year(date: &str) -> Option<i32> {
    date.get(..4)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_movie_from_tmdb_json() {
        let json = r#"{
            "adult": false,
            "id": 550,
            "title": "Fight Club",
            "overview": "A ticking-time-bomb insomniac...",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "popularity": 61.4
        }"#;
        let movie: CatalogMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 550);
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.poster_path.as_deref(), Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"));
    }

    #[test]
    fn test_catalog_movie_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "Untitled", "poster_path": null, "release_date": null}"#;
        let movie: CatalogMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.overview, "");
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn test_details_flatten() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/poster.jpg",
            "backdrop_path": "/backdrop.jpg",
            "release_date": "2010-07-15",
            "vote_average": 8.369,
            "runtime": 148,
            "tagline": "Your mind is the scene of the crime.",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#;
        let details: CatalogMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.movie.title, "Inception");
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.genre_names(), vec!["Action", "Science Fiction"]);
        assert_eq!(details.as_catalog_movie().id, 27205);
    }
}
