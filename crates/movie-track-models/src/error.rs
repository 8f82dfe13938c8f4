use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Personal rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("Invalid rating '{0}'. Use a whole number from 1 to 5")]
    InvalidRating(String),

    #[error("Invalid watched filter '{0}'. Use 'all', 'favorites' or a rating from 1 to 5")]
    InvalidFilter(String),

    #[error("Invalid movie status '{0}'. Use 'watchlist' or 'watched'")]
    InvalidStatus(String),
}
