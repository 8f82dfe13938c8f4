pub mod catalog;
pub mod error;
pub mod filter;
pub mod images;
pub mod movie;
pub mod rating;
pub mod status;
mod wire;

pub use catalog::{CatalogMovie, CatalogMovieDetails, Genre};
pub use error::ModelError;
pub use filter::WatchedFilter;
pub use images::{backdrop_url, poster_url};
pub use movie::{MovieUpdate, NewMovie, PersistedMovie};
pub use rating::{star_bar, PersonalRating};
pub use status::MovieStatus;
