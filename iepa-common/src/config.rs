//! Configuration loading and config file resolution
//!
//! Configuration is a small TOML file with two tables:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [analysis]
//! default_state = "national"
//! default_subject = "all"
//! default_grade = "3"
//! ```
//!
//! # Resolution Priority
//!
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`IEPA_CONFIG`)
//! 3. Platform config file (`~/.config/iepa/config.toml`, `/etc/iepa/config.toml`)
//! 4. Compiled defaults (fallback)
//!
//! A missing config file never terminates the program: the caller gets
//! compiled defaults plus a [`ConfigSource::Defaults`] explaining why.
//! A file that exists but cannot be parsed is an error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "IEPA_CONFIG";

/// Directory name used under the platform config dir
const APP_DIR: &str = "iepa";

/// Config file name inside [`APP_DIR`]
const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default filters applied when the caller leaves one unset
    #[serde(default)]
    pub analysis: AnalysisDefaults,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive string (e.g. "info", "iepa_standards=debug")
    ///
    /// `RUST_LOG` overrides this when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Default analysis filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// State filter ("national" or a recognized state name)
    #[serde(default = "default_state")]
    pub default_state: String,

    /// Subject filter ("all" or a subject tag)
    #[serde(default = "default_subject")]
    pub default_subject: String,

    /// Grade filter (none means no grade filtering)
    #[serde(default)]
    pub default_grade: Option<String>,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            default_state: default_state(),
            default_subject: default_subject(),
            default_grade: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_state() -> String {
    "national".to_string()
}

fn default_subject() -> String {
    "all".to_string()
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// Compiled defaults; `reason` says why no file was used
    Defaults { reason: String },
}

/// Effective configuration plus its provenance
///
/// Logging is usually not initialized yet when configuration is loaded,
/// so the source is handed back for the caller to report.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub source: ConfigSource,
}

/// Resolve the config file path following the priority order
///
/// Priorities 1 and 2 are returned even if the file does not exist so the
/// caller can report the missing path. Priority 3 is only returned when the
/// file exists. `None` means compiled defaults apply.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config file
    platform_config_file()
}

/// Load configuration following the priority order
///
/// # Errors
/// Returns [`Error::Config`] if a config file exists but cannot be read,
/// parsed, or validated.
pub fn load_config(cli_arg: Option<&Path>) -> Result<LoadedConfig> {
    match resolve_config_path(cli_arg, CONFIG_ENV_VAR) {
        Some(path) if path.exists() => {
            let config = load_toml_config(&path)?;
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            })
        }
        Some(path) => Ok(LoadedConfig {
            config: TomlConfig::default(),
            source: ConfigSource::Defaults {
                reason: format!("config file not found: {}", path.display()),
            },
        }),
        None => Ok(LoadedConfig {
            config: TomlConfig::default(),
            source: ConfigSource::Defaults {
                reason: "no config file found".to_string(),
            },
        }),
    }
}

/// Read, parse, and validate a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

impl TomlConfig {
    /// Reject values that would silently disable filtering
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        if self.analysis.default_state.trim().is_empty() {
            return Err(Error::Config(
                "analysis.default_state must not be empty (use \"national\")".to_string(),
            ));
        }
        if self.analysis.default_subject.trim().is_empty() {
            return Err(Error::Config(
                "analysis.default_subject must not be empty (use \"all\")".to_string(),
            ));
        }
        if let Some(grade) = &self.analysis.default_grade {
            if grade.trim().is_empty() {
                return Err(Error::Config(
                    "analysis.default_grade must not be empty (omit it instead)".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Get the platform config file path, if one exists
fn platform_config_file() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/iepa/config.toml first, then /etc/iepa/config.toml
        let user_config = dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE_NAME));
        let system_config = PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILE_NAME);

        if let Some(path) = user_config {
            if path.exists() {
                return Some(path);
            }
        }
        if system_config.exists() {
            return Some(system_config);
        }
        None
    } else {
        // macOS: ~/Library/Application Support/iepa, Windows: %APPDATA%\iepa
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}
