use super::CellId;
use geo::Point;

/// one unit of the sampling mesh, identified by its lattice position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub id: CellId,
    pub center: Point<f64>,
}
