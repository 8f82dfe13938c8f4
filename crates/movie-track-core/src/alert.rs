use tracing::warn;

pub const ADD_TO_WATCHLIST_FAILED: &str = "Failed to add movie to watchlist. It may already exist.";
pub const MARK_AS_WATCHED_FAILED: &str = "Failed to mark movie as watched";
pub const UPDATE_FAILED: &str = "Failed to update movie";
pub const DELETE_FAILED: &str = "Failed to delete movie";

/// Where user-facing failure messages go.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Sink that only logs; used when no front end is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, message: &str) {
        warn!(alert = message, "User alert");
    }
}
