pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{BackendConfig, CatalogConfig, Config};
pub use credentials::{CredentialStore, API_KEY_ENV_VAR};
pub use paths::PathManager;
