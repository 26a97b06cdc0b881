use super::{OracleError, OracleRequest, OracleResponse, RoutingOracle};
use crate::model::travel::{TransportMode, TravelRecord};
use geo::{Distance, Haversine};
use itertools::Itertools;

/// straight-line walking travel times. stands in for a full routing engine when only
/// the pedestrian leg matters, and for offline runs. wait time is always zero.
pub struct WalkingOracle {
    pub meters_per_minute: f64,
    pub max_travel_time: f64,
}

impl WalkingOracle {
    pub fn new(meters_per_minute: f64, max_travel_time: f64) -> Result<WalkingOracle, OracleError> {
        if !meters_per_minute.is_finite() || meters_per_minute <= 0.0 {
            return Err(OracleError::InvalidParameter(format!(
                "walking speed must be a positive number, found {meters_per_minute}"
            )));
        }
        if max_travel_time.is_nan() || max_travel_time <= 0.0 {
            return Err(OracleError::InvalidParameter(format!(
                "max travel time must be positive, found {max_travel_time}"
            )));
        }
        Ok(WalkingOracle {
            meters_per_minute,
            max_travel_time,
        })
    }
}

impl RoutingOracle for WalkingOracle {
    fn compute_travel_times(&self, request: &OracleRequest) -> Result<OracleResponse, OracleError> {
        if !request.modes.contains(&TransportMode::Walk) {
            return Err(OracleError::UnsupportedModes(request.modes.to_vec()));
        }
        let records = request
            .origins
            .iter()
            .flat_map(|cell| {
                let from_id = cell.id.to_string();
                request.destinations.iter().filter_map(move |facility| {
                    let meters = Haversine.distance(cell.center, facility.point);
                    let minutes = meters / self.meters_per_minute;
                    if minutes > self.max_travel_time {
                        None
                    } else {
                        Some(TravelRecord::new(
                            from_id.clone(),
                            facility.id.clone(),
                            Some(minutes),
                            Some(0.0),
                        ))
                    }
                })
            })
            .collect_vec();
        Ok(OracleResponse {
            records,
            warnings: vec![],
        })
    }
}
