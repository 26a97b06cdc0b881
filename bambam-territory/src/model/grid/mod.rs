mod bounding_box;
mod cell_id;
mod grid_cell;
mod lattice;

pub use bounding_box::BoundingBox;
pub use cell_id::CellId;
pub use grid_cell::GridCell;
pub use lattice::{Lattice, LatticeIter};
