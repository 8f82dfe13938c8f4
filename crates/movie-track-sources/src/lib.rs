pub mod backend;
pub mod error;
pub mod http;
pub mod tmdb;
pub mod traits;

pub use backend::BackendClient;
pub use error::SourceError;
pub use tmdb::TmdbClient;
pub use traits::{CatalogSource, MovieBackend};
