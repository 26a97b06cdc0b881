use super::{OracleError, OracleWarning};
use crate::model::{
    facility::Facility,
    grid::GridCell,
    travel::{TransportMode, TravelRecord},
};
use chrono::NaiveDateTime;

/// a batch travel time query, origins by destinations
pub struct OracleRequest<'a> {
    pub origins: &'a [GridCell],
    pub destinations: &'a [Facility],
    pub departure: NaiveDateTime,
    pub modes: &'a [TransportMode],
}

#[derive(Clone, Debug, Default)]
pub struct OracleResponse {
    /// records for reachable pairs, grouped by origin in request order
    pub records: Vec<TravelRecord>,
    pub warnings: Vec<OracleWarning>,
}

/// external travel time engine. implementations are blocking and compute every
/// origin/destination pair of the request.
pub trait RoutingOracle {
    fn compute_travel_times(&self, request: &OracleRequest) -> Result<OracleResponse, OracleError>;
}
