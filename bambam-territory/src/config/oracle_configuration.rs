use super::defaults;
use crate::model::{travel::TransportMode, TerritoryError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// how travel times are requested from the routing oracle
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct OracleConfiguration {
    /// origins per oracle call, also the chunk cache granularity
    pub chunk_size: usize,
    pub departure: NaiveDateTime,
    pub modes: Vec<TransportMode>,
    /// used by the walking oracle, in meters per minute
    pub walking_speed: f64,
    /// minutes, pairs above this are unreachable for the walking oracle
    pub max_travel_time: f64,
}

impl Default for OracleConfiguration {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            departure: default_departure(),
            modes: vec![TransportMode::Walk, TransportMode::Bus, TransportMode::Tram],
            walking_speed: defaults::WALKING_SPEED_METERS_PER_MINUTE,
            max_travel_time: defaults::MAX_TRAVEL_TIME_MINUTES,
        }
    }
}

impl OracleConfiguration {
    pub fn validate(&self) -> Result<(), TerritoryError> {
        if self.chunk_size == 0 {
            return Err(TerritoryError::ConfigurationError(String::from(
                "oracle.chunk_size must be positive",
            )));
        }
        if self.modes.is_empty() {
            return Err(TerritoryError::ConfigurationError(String::from(
                "oracle.modes must list at least one transport mode",
            )));
        }
        if !self.walking_speed.is_finite() || self.walking_speed <= 0.0 {
            return Err(TerritoryError::ConfigurationError(format!(
                "oracle.walking_speed must be positive, found {}",
                self.walking_speed
            )));
        }
        if self.max_travel_time.is_nan() || self.max_travel_time <= 0.0 {
            return Err(TerritoryError::ConfigurationError(format!(
                "oracle.max_travel_time must be positive, found {}",
                self.max_travel_time
            )));
        }
        Ok(())
    }
}

fn default_departure() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(defaults::DEPARTURE, "%Y-%m-%dT%H:%M:%S").unwrap_or_default()
}
