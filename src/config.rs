/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub monitor: MonitorConfig,
}

/// Construction parameters of an elevator. Missing fields fall back to floor 1,
/// one second per floor and four floors.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub current_floor: i32,
    pub speed: f64,
    pub max_floor: i32,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            current_floor: 1,
            speed: 1.0,
            max_floor: 4,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Milliseconds between two status polls.
    pub poll_interval: u64,
    /// Seconds the simulation runs before shutting down.
    pub run_time: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            poll_interval: 250,
            run_time: 15,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read configuration file: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigFileError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigFileError> {
    Ok(toml::from_str(config_str)?)
}

/// Like `load_config`, but a missing file means default settings.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigFileError> {
    match load_config(path.as_ref()) {
        Err(ConfigFileError::Read(e)) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "No configuration file at {}, using default settings",
                path.as_ref().display()
            );
            Ok(Config::default())
        }
        result => result,
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
