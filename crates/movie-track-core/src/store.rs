//! The application store: cached lists, UI flags and the operations that keep
//! them in step with the catalog and the backend.
//!
//! Every operation follows the same shape: await the network call, then apply
//! the response to the state under a short write lock, then notify listeners
//! with a fresh snapshot. The lock is never held across an `.await`.
//!
//! Overlapping operations are not serialized. If two searches are in flight
//! the one that resolves last overwrites the browse list, whichever was issued
//! first.

use chrono::{NaiveDate, Utc};
use movie_track_models::{
    CatalogMovie, CatalogMovieDetails, MovieStatus, MovieUpdate, PersistedMovie, WatchedFilter,
};
use movie_track_sources::{CatalogSource, MovieBackend, SourceError};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use crate::alert::{
    AlertSink, LogAlerts, ADD_TO_WATCHLIST_FAILED, DELETE_FAILED, MARK_AS_WATCHED_FAILED,
    UPDATE_FAILED,
};
use crate::error::StoreError;
use crate::observer::{Listener, ObserverRegistry, SubscriptionId};
use crate::state::StoreState;

type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct Store {
    catalog: Arc<dyn CatalogSource>,
    backend: Arc<dyn MovieBackend>,
    alerts: Arc<dyn AlertSink>,
    today: Clock,
    state: RwLock<StoreState>,
    observers: Mutex<ObserverRegistry>,
}

impl Store {
    pub fn new(catalog: Arc<dyn CatalogSource>, backend: Arc<dyn MovieBackend>) -> Self {
        Self {
            catalog,
            backend,
            alerts: Arc::new(LogAlerts),
            today: Arc::new(|| Utc::now().date_naive()),
            state: RwLock::new(StoreState::default()),
            observers: Mutex::new(ObserverRegistry::default()),
        }
    }

    pub fn with_alerts(mut self, alerts: Arc<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Overrides the date stamped on movies marked as watched.
    pub fn with_today<F>(mut self, today: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.today = Arc::new(today);
        self
    }

    // ========================================================================
    // State access
    // ========================================================================

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    pub fn filtered_watched(&self) -> Vec<PersistedMovie> {
        self.read().filtered_watched().into_iter().cloned().collect()
    }

    pub fn status_of(&self, catalog_id: u64) -> Option<MovieStatus> {
        self.read().status_of(catalog_id)
    }

    pub fn find_persisted(&self, catalog_id: u64) -> Option<PersistedMovie> {
        self.read().find_persisted(catalog_id).cloned()
    }

    pub fn find_by_id(&self, id: u64) -> Option<PersistedMovie> {
        self.read().find_by_id(id).cloned()
    }

    pub fn find_catalog(&self, catalog_id: u64) -> Option<CatalogMovie> {
        self.read().find_catalog(catalog_id)
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Registers the render callback, replacing any previous one.
    pub fn set_render_callback<F>(&self, render: F)
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        self.observers().set_render(Arc::new(render));
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        self.observers().subscribe(Arc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers().unsubscribe(id)
    }

    fn observers(&self) -> std::sync::MutexGuard<'_, ObserverRegistry> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Calls every listener with a snapshot taken now. No lock is held while
    /// listeners run.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self.observers().listeners();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    // ========================================================================
    // Browse list
    // ========================================================================

    /// Loads the popular list and clears any search. A failed fetch keeps the
    /// previous list.
    pub async fn load_browse_list(&self) {
        self.update(|s| {
            s.is_loading = true;
            s.search_query.clear();
        });
        self.notify();

        let result = self.catalog.popular_movies().await;
        self.finish_browse_fetch(result, "popular movies");
    }

    /// Replaces the browse list with catalog matches for `query`. A blank
    /// query loads the popular list instead.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            return self.load_browse_list().await;
        }

        self.update(|s| {
            s.is_loading = true;
            s.search_query = query.to_string();
        });
        self.notify();

        let result = self.catalog.search_movies(query).await;
        self.finish_browse_fetch(result, "search results");
    }

    fn finish_browse_fetch(&self, result: Result<Vec<CatalogMovie>, SourceError>, what: &str) {
        match result {
            Ok(movies) => {
                debug!(count = movies.len(), "Loaded {}", what);
                self.update(|s| {
                    s.browse_movies = movies;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                warn!(error = %e, "Failed to load {}", what);
                self.update(|s| s.is_loading = false);
            }
        }
        self.notify();
    }

    // ========================================================================
    // Lists
    // ========================================================================

    pub async fn load_watchlist(&self) {
        self.load_bucket(MovieStatus::Watchlist).await;
    }

    pub async fn load_watched(&self) {
        self.load_bucket(MovieStatus::Watched).await;
    }

    async fn load_bucket(&self, status: MovieStatus) {
        match self.backend.list_movies(status).await {
            Ok(movies) => {
                debug!(%status, count = movies.len(), "Loaded list");
                self.update(|s| match status {
                    MovieStatus::Watchlist => s.watchlist = movies,
                    MovieStatus::Watched => s.watched = movies,
                });
                self.notify();
            }
            Err(e) => warn!(%status, error = %e, "Failed to load list, keeping cached copy"),
        }
    }

    /// Initial load: browse list and both buckets, concurrently.
    pub async fn load_all(&self) {
        futures::join!(self.load_browse_list(), self.load_watchlist(), self.load_watched());
        let state = self.read();
        info!(
            browse = state.browse_movies.len(),
            watchlist = state.watchlist.len(),
            watched = state.watched.len(),
            "Initial load finished"
        );
    }

    /// Adds a catalog movie to the watchlist. Returns `None` (after alerting)
    /// when the backend refuses or the movie is already on a list.
    pub async fn add_to_watchlist(&self, movie: &CatalogMovie) -> Option<PersistedMovie> {
        if let Some(status) = self.status_of(movie.id) {
            debug!(catalog_id = movie.id, %status, "Movie already on a list");
            self.alerts.alert(ADD_TO_WATCHLIST_FAILED);
            return None;
        }

        match self.backend.add_to_watchlist(movie).await {
            Some(created) => {
                self.update(|s| place(s, created.clone()));
                self.notify();
                Some(created)
            }
            None => {
                self.alerts.alert(ADD_TO_WATCHLIST_FAILED);
                None
            }
        }
    }

    /// Moves a movie to the watched list, dated today. A watchlist record is
    /// updated in place; otherwise a new watched record is created.
    pub async fn mark_as_watched(&self, movie: &CatalogMovie) -> Result<PersistedMovie, StoreError> {
        let existing = self.find_persisted(movie.id);
        let today = (self.today)();

        match self.backend.mark_as_watched(movie, existing.as_ref(), today).await {
            Ok(watched) => {
                self.update(|s| {
                    s.watchlist.retain(|m| m.catalog_id != movie.id);
                    place(s, watched.clone());
                });
                self.notify();
                Ok(watched)
            }
            Err(e) => {
                self.alerts.alert(MARK_AS_WATCHED_FAILED);
                Err(e.into())
            }
        }
    }

    /// Sends a partial update and swaps the returned record into whichever
    /// bucket holds it.
    pub async fn update_movie(&self, id: u64, update: &MovieUpdate) -> Result<PersistedMovie, StoreError> {
        match self.backend.update_movie(id, update).await {
            Ok(updated) => {
                self.update(|s| {
                    if s.find_by_id(id).is_some() {
                        place(s, updated.clone());
                    }
                });
                self.notify();
                Ok(updated)
            }
            Err(e) => {
                self.alerts.alert(UPDATE_FAILED);
                Err(e.into())
            }
        }
    }

    pub async fn delete_movie(&self, id: u64) -> Result<(), StoreError> {
        match self.backend.delete_movie(id).await {
            Ok(()) => {
                self.update(|s| {
                    s.watchlist.retain(|m| m.id != id);
                    s.watched.retain(|m| m.id != id);
                });
                self.notify();
                Ok(())
            }
            Err(e) => {
                self.alerts.alert(DELETE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Flips the favorite flag of a cached record.
    pub async fn toggle_favorite(&self, id: u64) -> Result<PersistedMovie, StoreError> {
        let current = self.find_by_id(id).ok_or(StoreError::NotFound(id))?;
        self.update_movie(id, &MovieUpdate::favorite(!current.is_favorite)).await
    }

    /// Always notifies, even when the filter is unchanged.
    pub fn set_watched_filter(&self, filter: WatchedFilter) {
        self.update(|s| s.watched_filter = filter);
        self.notify();
    }

    // ========================================================================
    // Details
    // ========================================================================

    /// Opens the details overlay for a catalog movie and fetches its details.
    ///
    /// A response that arrives after the overlay was closed or switched to
    /// another movie is dropped.
    pub async fn open_movie_details(&self, catalog_id: u64) -> Option<CatalogMovieDetails> {
        self.update(|s| {
            s.selected_movie_id = Some(catalog_id);
            s.selected_movie_details = None;
            s.is_loading_details = true;
        });
        self.notify();

        let details = match self.catalog.movie_details(catalog_id).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(catalog_id, error = %e, "Failed to load movie details");
                None
            }
        };

        let current = self.update(|s| {
            if s.selected_movie_id != Some(catalog_id) {
                return false;
            }
            s.selected_movie_details = details.clone();
            s.is_loading_details = false;
            true
        });
        if current {
            self.notify();
        }
        details
    }

    pub fn close_movie_details(&self) {
        self.update(|s| {
            s.selected_movie_id = None;
            s.selected_movie_details = None;
            s.is_loading_details = false;
        });
        self.notify();
    }

    /// Catalog entry for an id: the browse list or open details first, then a
    /// details fetch.
    pub async fn resolve_catalog(&self, catalog_id: u64) -> Result<CatalogMovie, StoreError> {
        if let Some(movie) = self.find_catalog(catalog_id) {
            return Ok(movie);
        }
        match self.catalog.movie_details(catalog_id).await {
            Ok(details) => Ok(details.as_catalog_movie()),
            Err(e) if e.status_code() == Some(404) => Err(StoreError::UnknownMovie(catalog_id)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Files a record under the bucket its status names, replacing any copy with
/// the same id and removing it from the other bucket.
fn place(state: &mut StoreState, movie: PersistedMovie) {
    let (home, other) = match movie.status {
        MovieStatus::Watchlist => (&mut state.watchlist, &mut state.watched),
        MovieStatus::Watched => (&mut state.watched, &mut state.watchlist),
    };
    other.retain(|m| m.id != movie.id);
    match home.iter_mut().find(|m| m.id == movie.id) {
        Some(slot) => *slot = movie,
        None => home.push(movie),
    }
}
