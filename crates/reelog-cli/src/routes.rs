use std::fmt;

/// Top-level pages of the shell, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Browse,
    Watchlist,
    Watched,
    /// Any other path; rendered as `404`.
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "/" | "/browse" => Route::Browse,
            "/watchlist" => Route::Watchlist,
            "/watched" => Route::Watched,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Browse => "/browse",
            Route::Watchlist => "/watchlist",
            Route::Watched => "/watched",
            Route::NotFound(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Browse);
        assert_eq!(Route::from_path("/browse"), Route::Browse);
        assert_eq!(Route::from_path("/watchlist"), Route::Watchlist);
        assert_eq!(Route::from_path(" /watched "), Route::Watched);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/Watched"), Route::NotFound("/Watched".to_string()));
        assert_eq!(Route::from_path("/browse/"), Route::NotFound("/browse/".to_string()));
        assert_eq!(Route::from_path("/nope").path(), "/nope");
    }
}
