//! Config load and persistence.
//!
//! The config lives at `~/.tally/config.toml`. The theme flag is the only
//! state written back; it is persisted with `toml_edit` so user comments and
//! formatting survive the edit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use tally_types::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TallyConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Color theme: `"dark"` or `"light"`.
    pub theme: Option<String>,
}

impl TallyConfig {
    /// Load the config file. `Ok(None)` when the file (or home directory)
    /// does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// The configured theme, if present and recognized. Unknown spellings
    /// are logged and ignored so the caller falls back to the default.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        let raw = self.app.as_ref()?.theme.as_ref()?;
        let parsed = Theme::from_str_opt(raw);
        if parsed.is_none() {
            tracing::warn!("Unknown theme in config: {}", raw);
        }
        parsed
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Persist the theme flag to the config file.
    ///
    /// Uses `toml_edit` to preserve comments and formatting. Creates the
    /// config file and parent directory if they don't exist.
    pub fn persist_theme(theme: Theme) -> std::io::Result<()> {
        let Some(path) = config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        Self::persist_theme_to(&path, theme)
    }

    fn persist_theme_to(path: &Path, theme: Theme) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if !doc.contains_key("app") {
            doc["app"] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        doc["app"]["theme"] = toml_edit::value(theme.as_str());

        fs::write(path, doc.to_string())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tally").join("config.toml"))
}
