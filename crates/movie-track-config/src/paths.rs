use anyhow::Result;
use std::path::PathBuf;

const BASE_PATH_ENV_VAR: &str = "REELOG_BASE_PATH";

/// Container base directory named by `REELOG_BASE_PATH`, if set.
fn container_base_path() -> Option<PathBuf> {
    std::env::var_os(BASE_PATH_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelog");

        Ok(Self::with_base(base_dir))
    }

    /// Lay out all directories under a single base (config files at the top level).
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            log_dir: base.join("logs"),
        }
    }

    /// Uses `container_base` when it names an existing directory, else the
    /// platform config directory.
    pub fn resolve(container_base: Option<PathBuf>) -> Result<Self> {
        match container_base {
            Some(base) if base.is_dir() => Ok(Self::with_base(base)),
            _ => Self::new(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join("credentials.toml")
    }

    pub fn shell_log_file(&self) -> PathBuf {
        self.log_dir.join("reelog.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // No platform config dir (e.g. no HOME): fall back to the temp dir
        Self::resolve(container_base_path())
            .unwrap_or_else(|_| Self::with_base(std::env::temp_dir().join("reelog")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_under_base() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::with_base(dir.path().to_path_buf());
        assert_eq!(paths.config_file(), dir.path().join("config.toml"));
        assert_eq!(paths.credentials_file(), dir.path().join("credentials.toml"));
        assert_eq!(paths.shell_log_file(), dir.path().join("logs").join("reelog.log"));

        paths.ensure_directories().unwrap();
        assert!(dir.path().is_dir());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_existing_container_base_wins() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::resolve(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.config_file(), dir.path().join("config.toml"));
    }

    #[test]
    fn test_without_container_base_uses_platform_config_dir() {
        let Some(platform) = dirs::config_dir() else {
            return;
        };
        let expected = platform.join("reelog");

        let paths = PathManager::resolve(None).unwrap();
        assert_eq!(paths.config_file(), expected.join("config.toml"));
        assert_eq!(paths.shell_log_file(), expected.join("logs").join("reelog.log"));

        // A base that does not exist on disk is ignored
        let missing = TempDir::new().unwrap().path().join("not-there");
        let paths = PathManager::resolve(Some(missing)).unwrap();
        assert_eq!(paths.config_file(), expected.join("config.toml"));
    }
}
