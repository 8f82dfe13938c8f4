pub mod config;
pub mod lists;
pub mod loading;
pub mod movie;
pub mod prompts;
pub mod shell;

use crate::output::Output;
use crate::views::ViewContext;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_track_config::{Config, CredentialStore, PathManager, API_KEY_ENV_VAR};
use movie_track_core::Store;
use movie_track_sources::{BackendClient, TmdbClient};
use std::sync::Arc;
use tracing::debug;

/// A configured store plus what the views need to draw it.
pub struct App {
    pub store: Store,
    pub view: ViewContext,
}

/// Loads config and credentials and wires the clients into a store whose
/// alerts print through `output`.
pub fn build_app(output: &Output) -> Result<App> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration in {}: {}", config_file.display(), e))?;

    let credentials_file = path_manager.credentials_file();
    let mut credentials = CredentialStore::new(credentials_file.clone());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))?;

    let api_key = credentials.resolve_tmdb_api_key();
    if api_key.is_none() {
        output.warn(format!(
            "No TMDB API key configured. Run 'reelog config catalog' or set {}.",
            API_KEY_ENV_VAR
        ));
    }

    debug!(
        catalog = %config.catalog.base_url,
        backend = %config.backend.base_url,
        "Building store"
    );
    let catalog = TmdbClient::from_config(&config.catalog, api_key);
    let backend = BackendClient::from_config(&config.backend);
    let store = Store::new(Arc::new(catalog), Arc::new(backend)).with_alerts(Arc::new(*output));

    Ok(App {
        store,
        view: ViewContext::from_config(&config.catalog),
    })
}
