use super::{BoundingBox, CellId, GridCell};
use geo::{Point, Polygon};
use serde::{Deserialize, Serialize};

/// slack added before flooring the per-axis cell count, so an extent that is an exact
/// multiple of the step does not lose its last column to floating-point division.
const AXIS_TOLERANCE: f64 = 1e-9;

/// regular sampling mesh over a bounding box with a fixed step in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
    pub extent: BoundingBox,
    pub step: f64,
}

impl Lattice {
    pub fn new(extent: BoundingBox, step: f64) -> Result<Lattice, String> {
        let lattice = Lattice { extent, step };
        lattice.validate()?;
        Ok(lattice)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.extent.validate()?;
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(format!("grid step must be positive, found {}", self.step));
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(format!(
                "grid step {} is larger than the extent {:?}",
                self.step, self.extent
            ));
        }
        Ok(())
    }

    /// number of cells along x
    pub fn columns(&self) -> u32 {
        axis_count(self.extent.width(), self.step)
    }

    /// number of cells along y
    pub fn rows(&self) -> u32 {
        axis_count(self.extent.height(), self.step)
    }

    pub fn len(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// center of a cell, recomputed from its lattice indices. corners are `min + i * step`
    /// so the same id always maps to the same coordinate.
    pub fn center_of(&self, id: &CellId) -> Point<f64> {
        let half = self.step / 2.0;
        let x = self.extent.min_x + id.ix as f64 * self.step + half;
        let y = self.extent.min_y + id.iy as f64 * self.step + half;
        Point::new(x, y)
    }

    pub fn contains(&self, id: &CellId) -> bool {
        id.ix < self.columns() && id.iy < self.rows()
    }

    pub fn bounding_polygon(&self) -> Polygon<f64> {
        self.extent.as_polygon()
    }

    /// a fresh pass over every cell, x-major then y. each call restarts from the
    /// first cell and yields the same sequence.
    pub fn cells(&self) -> LatticeIter {
        LatticeIter {
            lattice: *self,
            columns: self.columns(),
            rows: self.rows(),
            next_ix: 0,
            next_iy: 0,
        }
    }
}

fn axis_count(span: f64, step: f64) -> u32 {
    ((span / step) + AXIS_TOLERANCE).floor() as u32
}

pub struct LatticeIter {
    lattice: Lattice,
    columns: u32,
    rows: u32,
    next_ix: u32,
    next_iy: u32,
}

impl Iterator for LatticeIter {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_ix >= self.columns || self.rows == 0 {
            return None;
        }
        let id = CellId::new(self.next_ix, self.next_iy);
        self.next_iy += 1;
        if self.next_iy >= self.rows {
            self.next_iy = 0;
            self.next_ix += 1;
        }
        Some(GridCell {
            id,
            center: self.lattice.center_of(&id),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = self.next_ix as usize * self.rows as usize + self.next_iy as usize;
        let total = self.columns as usize * self.rows as usize;
        let remaining = total.saturating_sub(done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LatticeIter {}

#[cfg(test)]
mod tests {
    use super::Lattice;
    use crate::model::grid::{BoundingBox, CellId};
    use itertools::Itertools;
    use std::collections::HashSet;

    fn milano() -> Lattice {
        let extent = BoundingBox::new(9.047, 9.334, 45.3803, 45.5614).unwrap();
        Lattice::new(extent, 0.002).unwrap()
    }

    #[test]
    fn test_cell_count_is_floor_product() {
        let lattice = milano();
        let expected_x = ((9.334 - 9.047) / 0.002_f64).floor() as usize;
        let expected_y = ((45.5614 - 45.3803) / 0.002_f64).floor() as usize;
        assert_eq!(lattice.cells().count(), expected_x * expected_y);
        assert_eq!(lattice.len(), expected_x * expected_y);
    }

    #[test]
    fn test_exact_multiple_keeps_last_column() {
        let extent = BoundingBox::new(0.0, 0.3, 0.0, 0.2).unwrap();
        let lattice = Lattice::new(extent, 0.1).unwrap();
        assert_eq!(lattice.columns(), 3);
        assert_eq!(lattice.rows(), 2);
    }

    #[test]
    fn test_identities_unique_and_stable() {
        let lattice = milano();
        let first = lattice.cells().map(|c| c.id).collect_vec();
        let second = lattice.cells().map(|c| c.id).collect_vec();
        assert_eq!(first, second);
        let unique: HashSet<_> = first.iter().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_order_is_x_major() {
        let extent = BoundingBox::new(0.0, 2.0, 0.0, 2.0).unwrap();
        let lattice = Lattice::new(extent, 1.0).unwrap();
        let ids = lattice.cells().map(|c| c.id.to_string()).collect_vec();
        assert_eq!(ids, vec!["0,0", "0,1", "1,0", "1,1"]);
    }

    #[test]
    fn test_centers_offset_by_half_step() {
        let extent = BoundingBox::new(10.0, 12.0, 20.0, 21.0).unwrap();
        let lattice = Lattice::new(extent, 0.5).unwrap();
        let cell = lattice.cells().nth(3).unwrap();
        assert_eq!(cell.id, CellId::new(1, 1));
        assert_eq!(cell.center.x(), 10.75);
        assert_eq!(cell.center.y(), 20.75);
        assert_eq!(lattice.center_of(&cell.id), cell.center);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let lattice = milano();
        let mut iter = lattice.cells();
        let total = iter.len();
        iter.next();
        assert_eq!(iter.len(), total - 1);
    }

    #[test]
    fn test_rejects_oversized_step() {
        let extent = BoundingBox::new(0.0, 1.0, 0.0, 1.0).unwrap();
        assert!(Lattice::new(extent, 2.0).is_err());
        assert!(Lattice::new(extent, 0.0).is_err());
    }
}
