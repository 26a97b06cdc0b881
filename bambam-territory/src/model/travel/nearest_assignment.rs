use crate::model::{facility::FacilityId, grid::CellId};
use serde::{Deserialize, Serialize};

/// the fastest reachable facility for one grid cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NearestAssignment {
    pub cell_id: CellId,
    pub facility_id: FacilityId,
    pub total_time: f64,
}
