/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::FloorBounds;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub timing: TimingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub min_floor: i32,
    pub max_floor: i32,
    pub initial_floor: i32,
}

/// Simulated delays, in milliseconds. One time unit is one `floor_travel_ms`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub floor_travel_ms: u64,
    pub door_dwell_ms: u64,
    pub idle_poll_ms: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid floor bounds: min_floor {min} is above max_floor {max}")]
    InvalidBounds { min: i32, max: i32 },
    #[error("floor span {min}..={max} is too wide")]
    FloorSpanTooWide { min: i32, max: i32 },
    #[error("initial floor {floor} is outside [{min}, {max}]")]
    InitialFloorOutOfBounds { floor: i32, min: i32, max: i32 },
    #[error("idle_poll_ms must be greater than zero")]
    ZeroIdlePoll,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            min_floor: FloorBounds::DEFAULT.min,
            max_floor: FloorBounds::DEFAULT.max,
            initial_floor: FloorBounds::DEFAULT.min,
        }
    }
}

impl ElevatorConfig {
    pub fn bounds(&self) -> FloorBounds {
        FloorBounds::new(self.min_floor, self.max_floor)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            floor_travel_ms: 1000,
            door_dwell_ms: 1000,
            idle_poll_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn floor_travel(&self) -> Duration {
        Duration::from_millis(self.floor_travel_ms)
    }

    pub fn door_dwell(&self) -> Duration {
        Duration::from_millis(self.door_dwell_ms)
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let elevator = &self.elevator;
        if elevator.min_floor > elevator.max_floor {
            return Err(ConfigError::InvalidBounds {
                min: elevator.min_floor,
                max: elevator.max_floor,
            });
        }
        // Distances between any two floors must fit in an i32
        if elevator.max_floor.checked_sub(elevator.min_floor).is_none() {
            return Err(ConfigError::FloorSpanTooWide {
                min: elevator.min_floor,
                max: elevator.max_floor,
            });
        }
        if !elevator.bounds().contains(elevator.initial_floor) {
            return Err(ConfigError::InitialFloorOutOfBounds {
                floor: elevator.initial_floor,
                min: elevator.min_floor,
                max: elevator.max_floor,
            });
        }
        if self.timing.idle_poll_ms == 0 {
            return Err(ConfigError::ZeroIdlePoll);
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

/// Loads `path`, falling back to the defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No configuration file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
