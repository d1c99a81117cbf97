use crate::modules::interactions::core::interaction::DuplicateAddPolicy;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const ADDR: &str = "FOODGRAM_ADDR";
pub const BASE_URL: &str = "FOODGRAM_BASE_URL";
pub const DUPLICATE_ADD: &str = "FOODGRAM_DUPLICATE_ADD";
pub const SEED_PATH: &str = "FOODGRAM_SEED_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {key} value `{value}`: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Public origin used to build short links.
    pub base_url: String,
    pub duplicate_add: DuplicateAddPolicy,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            addr: try_load(&lookup, ADDR, "0.0.0.0:8080")?,
            base_url: try_load(&lookup, BASE_URL, "http://localhost:8080")?,
            duplicate_add: try_load(&lookup, DUPLICATE_ADD, "reject")?,
            seed_path: lookup(SEED_PATH)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| ConfigError {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}
