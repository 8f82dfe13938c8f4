use movie_track_models::{
    CatalogMovie, CatalogMovieDetails, MovieStatus, PersistedMovie, WatchedFilter,
};

/// Everything the views need to draw a frame.
///
/// The store owns one of these behind a lock and hands out clones; a clone is
/// a consistent snapshot of both buckets, the browse list and the open details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Popular list or the latest search results
    pub browse_movies: Vec<CatalogMovie>,
    pub watchlist: Vec<PersistedMovie>,
    pub watched: Vec<PersistedMovie>,
    /// Empty when the browse list shows popular movies
    pub search_query: String,
    pub is_loading: bool,
    pub watched_filter: WatchedFilter,
    /// Catalog id of the movie whose details are open
    pub selected_movie_id: Option<u64>,
    pub selected_movie_details: Option<CatalogMovieDetails>,
    pub is_loading_details: bool,
}

impl StoreState {
    /// Watched bucket narrowed by the active filter, bucket order kept.
    pub fn filtered_watched(&self) -> Vec<&PersistedMovie> {
        self.watched_filter.apply(&self.watched)
    }

    /// Which list a catalog movie is on, by bucket membership. The watchlist is
    /// checked first.
    pub fn status_of(&self, catalog_id: u64) -> Option<MovieStatus> {
        if self.watchlist.iter().any(|m| m.catalog_id == catalog_id) {
            Some(MovieStatus::Watchlist)
        } else if self.watched.iter().any(|m| m.catalog_id == catalog_id) {
            Some(MovieStatus::Watched)
        } else {
            None
        }
    }

    pub fn find_persisted(&self, catalog_id: u64) -> Option<&PersistedMovie> {
        self.watchlist
            .iter()
            .chain(self.watched.iter())
            .find(|m| m.catalog_id == catalog_id)
    }

    /// Looks a record up by its local (backend) id.
    pub fn find_by_id(&self, id: u64) -> Option<&PersistedMovie> {
        self.watchlist
            .iter()
            .chain(self.watched.iter())
            .find(|m| m.id == id)
    }

    /// Catalog entry from the browse list, falling back to the open details.
    pub fn find_catalog(&self, catalog_id: u64) -> Option<CatalogMovie> {
        self.browse_movies
            .iter()
            .find(|m| m.id == catalog_id)
            .cloned()
            .or_else(|| {
                self.selected_movie_details
                    .as_ref()
                    .filter(|d| d.movie.id == catalog_id)
                    .map(CatalogMovieDetails::as_catalog_movie)
            })
    }
}

