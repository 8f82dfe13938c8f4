use movie_track_models::images::{DEFAULT_BACKDROP_BASE_URL, DEFAULT_POSTER_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Movie catalog (TMDB) endpoints. The API key lives in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,
    #[serde(default = "default_backdrop_base_url")]
    pub backdrop_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
}

fn default_catalog_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_poster_base_url() -> String {
    DEFAULT_POSTER_BASE_URL.to_string()
}

fn default_backdrop_base_url() -> String {
    DEFAULT_BACKDROP_BASE_URL.to_string()
}

fn default_backend_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            language: default_language(),
            poster_base_url: default_poster_base_url(),
            backdrop_base_url: default_backdrop_base_url(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the file when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let urls = [
            ("catalog.base_url", &self.catalog.base_url),
            ("catalog.poster_base_url", &self.catalog.poster_base_url),
            ("catalog.backdrop_base_url", &self.catalog.backdrop_base_url),
            ("backend.base_url", &self.backend.base_url),
        ];
        for (name, url) in urls {
            if url.trim().is_empty() {
                return Err(anyhow::anyhow!("{} cannot be empty", name));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if self.catalog.language.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.language cannot be empty"));
        }

        Ok(())
    }
}
