use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Which personal list a persisted movie belongs to.
///
/// The backend stores this as a lowercase string and filters on it in
/// `GET /movies?status=...`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    /// Want to watch
    Watchlist,
    /// Seen, may carry a rating, review and favorite flag
    Watched,
}

impl MovieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Watchlist => "watchlist",
            MovieStatus::Watched => "watched",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "watchlist" => Ok(MovieStatus::Watchlist),
            "watched" => Ok(MovieStatus::Watched),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}
