use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use contactbook_core::rules::{validate_window_days, DEFAULT_WINDOW_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "contactbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Session settings. Nothing here describes stored contacts; the address book
/// lives only in memory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Days, counted from today inclusive, covered by the `birthdays` report.
    pub birthday_window_days: i64,
    pub repl: ReplConfig,
}

/// Text printed by the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub greeting: String,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            repl: ReplConfig {
                greeting: DEFAULT_GREETING.to_string(),
                prompt: DEFAULT_PROMPT.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid birthday_window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    birthday_window_days: Option<i64>,
    repl: Option<ReplFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplFile {
    greeting: Option<String>,
    prompt: Option<String>,
}

/// Loads `config.toml`, falling back to defaults when no `--config` was given
/// and the default file is absent. An explicit path must exist.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

/// `--config`, else `$XDG_CONFIG_HOME/contactbook/config.toml`, else
/// `~/.config/contactbook/config.toml`.
pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

impl AppConfig {
    pub fn uses_default_repl_text(&self) -> bool {
        self.repl.greeting == DEFAULT_GREETING && self.repl.prompt == DEFAULT_PROMPT
    }
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(days) = parsed.birthday_window_days {
        config.birthday_window_days =
            validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?;
    }

    if let Some(repl) = parsed.repl {
        if let Some(greeting) = repl.greeting {
            config.repl.greeting = greeting;
        }
        if let Some(prompt) = repl.prompt {
            config.repl.prompt = prompt;
        }
    }

    Ok(config)
}
