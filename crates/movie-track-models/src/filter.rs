use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::movie::PersistedMovie;
use crate::rating::PersonalRating;

/// Filter applied to the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WatchedFilter {
    #[default]
    All,
    Favorites,
    Rating(PersonalRating),
}

impl WatchedFilter {
    /// Every filter offered by the watched view, in display order.
    pub fn choices() -> Vec<WatchedFilter> {
        let mut choices = vec![WatchedFilter::All, WatchedFilter::Favorites];
        choices.extend(
            (PersonalRating::MIN..=PersonalRating::MAX)
                .rev()
                .filter_map(|n| PersonalRating::new(n).ok())
                .map(WatchedFilter::Rating),
        );
        choices
    }

    pub fn matches(&self, movie: &PersistedMovie) -> bool {
        match self {
            WatchedFilter::All => true,
            WatchedFilter::Favorites => movie.is_favorite,
            WatchedFilter::Rating(rating) => movie.personal_rating == Some(*rating),
        }
    }

    /// Applies the filter to a bucket, keeping bucket order.
    pub fn apply<'a>(&self, movies: &'a [PersistedMovie]) -> Vec<&'a PersistedMovie> {
        movies.iter().filter(|m| self.matches(m)).collect()
    }
}

impl fmt::Display for WatchedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchedFilter::All => f.write_str("all"),
            WatchedFilter::Favorites => f.write_str("favorites"),
            WatchedFilter::Rating(rating) => write!(f, "{}", rating),
        }
    }
}

impl FromStr for WatchedFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WatchedFilter::All),
            "favorites" | "favourites" => Ok(WatchedFilter::Favorites),
            other => other
                .parse::<PersonalRating>()
                .map(WatchedFilter::Rating)
                .map_err(|_| ModelError::InvalidFilter(s.to_string())),
        }
    }
}
