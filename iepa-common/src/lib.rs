//! # IEPA Common Library
//!
//! Shared code for the IEP standards-alignment crates:
//! - Error type (`Error`, `Result`)
//! - TOML configuration loading and resolution
//! - Logging configuration

pub mod config;
pub mod error;

pub use config::{AnalysisDefaults, ConfigSource, LoadedConfig, LoggingConfig, TomlConfig};
pub use error::{Error, Result};
