use crate::model::TerritoryError;
use serde::{Deserialize, Serialize};

/// which routes of the GTFS feed provide destination facilities
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ScheduleConfiguration {
    /// GTFS `route_type` codes, 1 is subway
    pub route_types: Vec<i16>,
}

impl Default for ScheduleConfiguration {
    fn default() -> Self {
        Self {
            route_types: vec![1],
        }
    }
}

impl ScheduleConfiguration {
    pub fn validate(&self) -> Result<(), TerritoryError> {
        if self.route_types.is_empty() {
            return Err(TerritoryError::ConfigurationError(String::from(
                "schedule.route_types must not be empty",
            )));
        }
        Ok(())
    }
}
