use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// How the configuration came to be.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File,
    /// No file existed; one was written with defaults.
    Created,
    /// Defaults are in use because of the carried error; nothing was written.
    Fallback(ConfigError),
}

/// Result of [`load_config`]: the configuration plus where it came from.
///
/// Loading happens before logging is set up, so nothing is logged while
/// loading; call [`LoadedConfig::report`] once a subscriber is installed.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Logs how the configuration was obtained.
    pub fn report(&self) {
        let path = self
            .path
            .as_deref()
            .map_or_else(|| "<none>".to_owned(), |p| p.display().to_string());
        match &self.source {
            ConfigSource::File => info!(%path, "Configuration loaded"),
            ConfigSource::Created => info!(%path, "Default configuration written"),
            ConfigSource::Fallback(error) => {
                warn!(%path, %error, "Using default configuration");
            }
        }
    }

    /// Whether defaults replaced the configuration because of an error.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, ConfigSource::Fallback(_))
    }
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Manager rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if the platform has no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the default config file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Reads `path`, creating it with defaults when missing.
    ///
    /// A file that does not parse is left untouched; defaults are returned
    /// and the parse error travels in [`ConfigSource::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn read_or_create(&self, path: &Path) -> Result<LoadedConfig, ConfigError> {
        let loaded = |config: AppConfig, source: ConfigSource| LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
            source,
        };

        if !path.exists() {
            let parent = path.parent().unwrap_or(&self.config_dir);
            fs::create_dir_all(parent)?;
            let config = AppConfig::default();
            write_atomic(path, &config)?;
            return Ok(loaded(config, ConfigSource::Created));
        }

        let content = fs::read_to_string(path)?;
        Ok(match toml::from_str::<AppConfig>(&content) {
            Ok(config) => loaded(config, ConfigSource::File),
            Err(e) => loaded(AppConfig::default(), ConfigSource::Fallback(e.into())),
        })
    }
}

/// Loads the configuration from `path_override`, else from the platform
/// config directory.
///
/// Without an override and without a platform directory, defaults are used
/// and `ConfigDirNotFound` is carried in the fallback.
///
/// # Errors
///
/// Returns `ConfigError` on I/O failures while reading or writing the file.
pub fn load_config(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match path_override {
        Some(path) => {
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            StorageManager::with_dir(dir).read_or_create(path)
        }
        None => match StorageManager::new() {
            Ok(storage) => storage.read_or_create(&storage.config_file()),
            Err(e) => Ok(LoadedConfig {
                config: AppConfig::default(),
                path: None,
                source: ConfigSource::Fallback(e),
            }),
        },
    }
}

fn write_atomic<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(data)?;

    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("Invalid path"))?;
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScreenKind;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("lemonstand"));

        let loaded = manager.read_or_create(&manager.config_file()).unwrap();

        assert!(matches!(loaded.source, ConfigSource::Created));
        assert!(loaded.config.mouse);
        let written = fs::read_to_string(manager.config_file()).unwrap();
        let reparsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(reparsed.start_screen, ScreenKind::Lemonade);
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = manager.config_file();
        fs::write(&config_file, "invalid_toml = [").unwrap();

        let loaded = manager.read_or_create(&config_file).unwrap();

        assert!(loaded.is_fallback());
        assert!(matches!(
            loaded.source,
            ConfigSource::Fallback(ConfigError::TomlDe(_))
        ));
        assert!(loaded.config.mouse);
        assert_eq!(fs::read_to_string(&config_file).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_existing_file_is_parsed() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(
            &custom,
            "start_screen = \"greeting\"\n[strings]\nroll_label = \"Throw\"",
        )
        .unwrap();

        let loaded = load_config(Some(&custom)).unwrap();

        assert!(matches!(loaded.source, ConfigSource::File));
        assert_eq!(loaded.path.as_deref(), Some(custom.as_path()));
        assert_eq!(loaded.config.start_screen, ScreenKind::Greeting);
        assert_eq!(
            loaded.config.strings.get("roll_label").map(String::as_str),
            Some("Throw")
        );
    }

    #[test]
    fn test_override_in_new_directory_creates_parent() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("nested").join("lemon.toml");

        let loaded = load_config(Some(&custom)).unwrap();

        assert!(matches!(loaded.source, ConfigSource::Created));
        assert!(custom.exists());
    }
}
