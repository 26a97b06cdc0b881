use crate::model::grid::CellId;
use geo::{Line, LineString};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentOrientation {
    /// separates a cell from its left neighbour
    Vertical,
    /// separates a cell from its lower neighbour
    Horizontal,
}

/// two-point boundary line emitted for a cell whose neighbour is served by a
/// different facility. the line starts at the cell center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSegment {
    pub cell_id: CellId,
    pub orientation: SegmentOrientation,
    pub line: Line<f64>,
}

impl BorderSegment {
    pub fn as_line_string(&self) -> LineString<f64> {
        LineString::from(vec![self.line.start, self.line.end])
    }
}
