use super::FacilityId;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a transit stop/line combination used as a travel-time destination.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Facility {
    pub id: FacilityId,
    pub line_id: String,
    pub stop_id: String,
    pub point: Point<f64>,
}

impl Facility {
    pub fn new(line_id: &str, stop_id: &str, lon: f64, lat: f64) -> Facility {
        Facility {
            id: FacilityId::new(stop_id, line_id),
            line_id: line_id.to_string(),
            stop_id: stop_id.to_string(),
            point: Point::new(lon, lat),
        }
    }
}
