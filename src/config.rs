use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            data_dir: PathBuf::from(get_env_or("TALENTHUB_DATA_DIR", ".talenthub")),
            export_dir: PathBuf::from(get_env_or("TALENTHUB_EXPORT_DIR", "exports")),
            log_json: get_env_parse_or("TALENTHUB_LOG_JSON", false)?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
