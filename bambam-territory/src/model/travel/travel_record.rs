use crate::model::facility::FacilityId;
use serde::{Deserialize, Serialize};

/// one origin/destination result from the routing oracle. times are in minutes and
/// are `None` when the pair is unreachable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TravelRecord {
    pub from_id: String,
    pub to_id: FacilityId,
    pub travel_time: Option<f64>,
    pub wait_time: Option<f64>,
}

impl TravelRecord {
    pub fn new(
        from_id: String,
        to_id: FacilityId,
        travel_time: Option<f64>,
        wait_time: Option<f64>,
    ) -> TravelRecord {
        TravelRecord {
            from_id,
            to_id,
            travel_time,
            wait_time,
        }
    }

    /// travel plus wait time, only when both are defined and the sum is finite.
    pub fn total_time(&self) -> Option<f64> {
        match (self.travel_time, self.wait_time) {
            (Some(travel), Some(wait)) => Some(travel + wait).filter(|t| t.is_finite()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelRecord;
    use crate::model::facility::FacilityId;

    fn record(travel: Option<f64>, wait: Option<f64>) -> TravelRecord {
        TravelRecord::new(String::from("0,0"), FacilityId::from("A (M1)"), travel, wait)
    }

    #[test]
    fn test_total_time() {
        assert_eq!(record(Some(10.0), Some(2.5)).total_time(), Some(12.5));
        assert_eq!(record(None, Some(2.5)).total_time(), None);
        assert_eq!(record(Some(10.0), None).total_time(), None);
        assert_eq!(record(Some(f64::NAN), Some(0.0)).total_time(), None);
        assert_eq!(record(Some(f64::INFINITY), Some(0.0)).total_time(), None);
    }
}
