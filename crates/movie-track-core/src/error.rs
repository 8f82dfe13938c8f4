//! Error types for store operations and command parsing.

use movie_track_models::ModelError;
use movie_track_sources::SourceError;
use thiserror::Error;

/// Failure of a store operation.
///
/// Network failures are wrapped as they come from the clients. The store has
/// already alerted the user and left its buckets untouched by the time one of
/// these is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The catalog has no movie with this id (and it is not in the browse list).
    #[error("Movie {0} was not found in the catalog")]
    UnknownMovie(u64),

    /// No record with this local id is on the list the action works on.
    /// Ratings and reviews look only at the watched list.
    #[error("No movie with id {0} on your lists")]
    NotFound(u64),
}

/// Shell input that does not form a command.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownVerb(String),

    #[error("'{verb}' expects {expected}")]
    MissingArgument {
        verb: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error("Invalid movie id '{0}'")]
    InvalidId(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
