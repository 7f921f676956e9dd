//! Process configuration read from the environment.
//!
//! Every key has a default; a key that is set but malformed is an error.

use log::{debug, warn};
use portfolio_core::{default_log_level, StoreConfig};
use std::env;
use std::fmt::Display;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_DB_PATH: &str = "projects.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_IMAGES_DIR: &str = "static/images";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value `{value}`: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub images_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
    /// Insert the demo projects into an empty store at startup.
    pub seed_demo_projects: bool,
}

impl WebConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load("PORTFOLIO_HOST", DEFAULT_HOST)?,
            port: try_load("PORT", DEFAULT_PORT)?,
            debug: load_flag("PORTFOLIO_DEBUG", false)?,
            db_path: try_load("PORTFOLIO_DB_PATH", DEFAULT_DB_PATH)?,
            static_dir: try_load("PORTFOLIO_STATIC_DIR", DEFAULT_STATIC_DIR)?,
            images_dir: try_load("PORTFOLIO_IMAGES_DIR", DEFAULT_IMAGES_DIR)?,
            log_dir: var("PORTFOLIO_LOG_DIR").map(PathBuf::from),
            seed_demo_projects: load_flag("PORTFOLIO_SEED_DEMO", true)?,
        })
    }

    /// Configuration rooted in `root`, used by tests and embedding callers.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let static_dir = root.join(DEFAULT_STATIC_DIR);
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            debug: false,
            db_path: root.join(DEFAULT_DB_PATH),
            images_dir: static_dir.join("images"),
            static_dir,
            log_dir: None,
            seed_demo_projects: true,
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.db_path.clone())
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            default_log_level()
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse_value(key, value)
}

fn load_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match var(key) {
        Some(value) => parse_flag(key, value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(ConfigError::InvalidValue {
            key,
            reason: err.to_string(),
            value,
        }),
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => {
            warn!("{key} has unrecognized flag value `{value}`");
            Err(ConfigError::InvalidValue {
                key,
                value,
                reason: "expected 1/0, true/false, yes/no or on/off".to_string(),
            })
        }
    }
}
