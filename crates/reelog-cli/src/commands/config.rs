use super::prompts;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use movie_track_config::{Config, CredentialStore, PathManager, API_KEY_ENV_VAR};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(full, output),
        crate::ConfigCommands::Catalog { api_key, base_url, language } => {
            configure_catalog(api_key, base_url, language, output)
        }
        crate::ConfigCommands::Backend { base_url } => configure_backend(base_url, output),
    }
}

fn load_config(path_manager: &PathManager) -> Result<Config> {
    let config_file = path_manager.config_file();
    Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))
}

fn load_credentials(path_manager: &PathManager) -> Result<CredentialStore> {
    let credentials_file = path_manager.credentials_file();
    let mut store = CredentialStore::new(credentials_file.clone());
    store
        .load()
        .map_err(|e| eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))?;
    Ok(store)
}

fn save_config(config: &Config, path_manager: &PathManager) -> Result<()> {
    config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create configuration directories: {}", e))?;
    let config_file = path_manager.config_file();
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))
}

/// Where the effective API key comes from.
fn api_key_source(credentials: &CredentialStore) -> &'static str {
    let from_env = std::env::var(API_KEY_ENV_VAR).map(|k| !k.trim().is_empty()).unwrap_or(false);
    if from_env {
        "environment"
    } else if credentials.get_tmdb_api_key().is_some_and(|k| !k.trim().is_empty()) {
        "credentials file"
    } else {
        "not set"
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = load_config(&path_manager)?;
    let credentials = load_credentials(&path_manager)?;

    let api_key = credentials.resolve_tmdb_api_key().unwrap_or_default();
    let api_key_display = if full { api_key.clone() } else { mask_string(&api_key) };
    let source = api_key_source(&credentials);

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if !config_file.exists() {
                output.warn(format!(
                    "No configuration file at {}; showing defaults",
                    config_file.display()
                ));
            }

            println!("\n{}", "Configuration".bright_cyan().bold());
            println!();

            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            table.set_header(vec![
                Cell::new("Setting").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display().to_string())]);
            table.add_row(vec![Cell::new("Catalog URL"), Cell::new(&config.catalog.base_url)]);
            table.add_row(vec![Cell::new("Language"), Cell::new(&config.catalog.language)]);
            table.add_row(vec![Cell::new("Poster URL"), Cell::new(&config.catalog.poster_base_url)]);
            table.add_row(vec![Cell::new("Backdrop URL"), Cell::new(&config.catalog.backdrop_base_url)]);
            table.add_row(vec![
                Cell::new("TMDB API Key"),
                Cell::new(format!("{} ({})", api_key_display, source)),
            ]);
            table.add_row(vec![Cell::new("Backend URL"), Cell::new(&config.backend.base_url)]);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "catalog": {
                    "base_url": config.catalog.base_url,
                    "language": config.catalog.language,
                    "poster_base_url": config.catalog.poster_base_url,
                    "backdrop_base_url": config.catalog.backdrop_base_url,
                    "api_key": api_key_display,
                    "api_key_source": source,
                },
                "backend": {
                    "base_url": config.backend.base_url,
                },
            }));
        }
    }

    Ok(())
}

fn configure_catalog(
    api_key: Option<String>,
    base_url: Option<String>,
    language: Option<String>,
    output: &Output,
) -> Result<()> {
    let path_manager = PathManager::default();
    let mut config = load_config(&path_manager)?;
    let mut credentials = load_credentials(&path_manager)?;
    let interactive = api_key.is_none() && base_url.is_none() && language.is_none();

    let api_key = if interactive {
        output.info("Get an API key at https://www.themoviedb.org/settings/api");
        let entered = prompts::prompt_password("TMDB API key (leave empty to keep current)")?;
        Some(entered).filter(|k| !k.trim().is_empty())
    } else {
        api_key
    };
    let base_url = match base_url {
        Some(url) => Some(url),
        None if interactive => Some(prompts::prompt_string("Catalog base URL", Some(&config.catalog.base_url))?),
        None => None,
    };
    let language = match language {
        Some(lang) => Some(lang),
        None if interactive => Some(prompts::prompt_string("Language", Some(&config.catalog.language))?),
        None => None,
    };

    if let Some(url) = base_url {
        config.catalog.base_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(lang) = language {
        config.catalog.language = lang.trim().to_string();
    }
    save_config(&config, &path_manager)?;

    if let Some(key) = api_key {
        credentials.set_tmdb_api_key(key.trim().to_string());
        credentials.save().map_err(|e| eyre!("Failed to save credentials: {}", e))?;
    }

    output.success("Catalog settings saved!");
    Ok(())
}

fn configure_backend(base_url: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let mut config = load_config(&path_manager)?;

    let base_url = match base_url {
        Some(url) => url,
        None => prompts::prompt_string("Backend base URL", Some(&config.backend.base_url))?,
    };
    config.backend.base_url = base_url.trim().trim_end_matches('/').to_string();
    save_config(&config, &path_manager)?;

    output.success("Backend settings saved!");
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}
