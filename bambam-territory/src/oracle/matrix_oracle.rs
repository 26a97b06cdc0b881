use super::{OracleError, OracleRequest, OracleResponse, OracleWarning, RoutingOracle};
use crate::model::{facility::FacilityId, travel::TravelRecord};
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

/// replays travel times exported from an external routing engine. the matrix is a CSV
/// file with the columns `from_id,to_id,travel_time,wait_time` where empty times mark
/// unreachable pairs.
pub struct MatrixOracle {
    rows: HashMap<String, Vec<TravelRecord>>,
    service_window: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl MatrixOracle {
    pub fn new(records: Vec<TravelRecord>) -> MatrixOracle {
        let mut rows: HashMap<String, Vec<TravelRecord>> = HashMap::new();
        for record in records.into_iter() {
            rows.entry(record.from_id.clone()).or_default().push(record);
        }
        MatrixOracle {
            rows,
            service_window: None,
        }
    }

    pub fn from_csv(path: &str) -> Result<MatrixOracle, OracleError> {
        log::info!("loading travel time matrix from {path}");
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| OracleError::MatrixReadError(path.to_string(), e))?;
        let records = reader
            .deserialize::<TravelRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| OracleError::MatrixReadError(path.to_string(), e))?;
        log::info!("loaded {} matrix rows", records.len());
        Ok(MatrixOracle::new(records))
    }

    /// departures outside of `[start, end]` produce a schedule window warning.
    pub fn with_service_window(self, start: NaiveDateTime, end: NaiveDateTime) -> MatrixOracle {
        MatrixOracle {
            service_window: Some((start, end)),
            ..self
        }
    }
}

impl RoutingOracle for MatrixOracle {
    fn compute_travel_times(&self, request: &OracleRequest) -> Result<OracleResponse, OracleError> {
        let mut warnings = vec![];
        if let Some((start, end)) = self.service_window {
            if request.departure < start || request.departure > end {
                warnings.push(OracleWarning::DepartureOutsideSchedule {
                    departure: request.departure,
                    detail: format!("matrix covers {start} to {end}"),
                });
            }
        }
        let destinations: HashSet<&FacilityId> =
            request.destinations.iter().map(|f| &f.id).collect();
        let mut records = vec![];
        for cell in request.origins.iter() {
            let Some(rows) = self.rows.get(&cell.id.to_string()) else {
                continue;
            };
            records.extend(
                rows.iter()
                    .filter(|r| destinations.contains(&r.to_id))
                    .cloned(),
            );
        }
        Ok(OracleResponse { records, warnings })
    }
}
