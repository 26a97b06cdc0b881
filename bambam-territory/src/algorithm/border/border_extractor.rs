use super::{BorderSegment, SegmentOrientation};
use crate::model::{
    facility::FacilityId,
    grid::{CellId, Lattice},
    travel::NearestAssignment,
};
use geo::{Coord, Line};
use std::collections::HashMap;

/// finds lattice neighbours served by different facilities.
///
/// every cell whose left neighbour has a different raw facility emits a vertical
/// segment from its center one step up, then every cell whose lower neighbour differs
/// emits a horizontal segment from its center one step right. both passes follow the
/// assignment order and segments are not deduplicated.
pub fn extract_borders(assignments: &[NearestAssignment], lattice: &Lattice) -> Vec<BorderSegment> {
    let served_by: HashMap<CellId, &FacilityId> = assignments
        .iter()
        .map(|a| (a.cell_id, &a.facility_id))
        .collect();
    let step = lattice.step;

    let differs = |cell: &NearestAssignment, neighbour: Option<CellId>| -> bool {
        neighbour
            .and_then(|n| served_by.get(&n))
            .map(|other| **other != cell.facility_id)
            .unwrap_or(false)
    };

    let vertical = assignments
        .iter()
        .filter(|a| differs(a, a.cell_id.left()))
        .map(|a| {
            let center = lattice.center_of(&a.cell_id);
            BorderSegment {
                cell_id: a.cell_id,
                orientation: SegmentOrientation::Vertical,
                line: Line::new(
                    center.0,
                    Coord {
                        x: center.x(),
                        y: center.y() + step,
                    },
                ),
            }
        });
    let horizontal = assignments
        .iter()
        .filter(|a| differs(a, a.cell_id.below()))
        .map(|a| {
            let center = lattice.center_of(&a.cell_id);
            BorderSegment {
                cell_id: a.cell_id,
                orientation: SegmentOrientation::Horizontal,
                line: Line::new(
                    center.0,
                    Coord {
                        x: center.x() + step,
                        y: center.y(),
                    },
                ),
            }
        });
    let segments: Vec<BorderSegment> = vertical.chain(horizontal).collect();
    log::info!(
        "extracted {} border segments from {} assigned cells",
        segments.len(),
        assignments.len()
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::extract_borders;
    use crate::algorithm::border::SegmentOrientation;
    use crate::model::{
        facility::FacilityId,
        grid::{BoundingBox, CellId, Lattice},
        travel::NearestAssignment,
    };
    use geo::Coord;

    fn assign(ix: u32, iy: u32, facility: &str) -> NearestAssignment {
        NearestAssignment {
            cell_id: CellId::new(ix, iy),
            facility_id: FacilityId::from(facility),
            total_time: 5.0,
        }
    }

    fn lattice() -> Lattice {
        Lattice::new(BoundingBox::new(0.0, 2.0, 0.0, 2.0).unwrap(), 1.0).unwrap()
    }

    #[test]
    fn test_two_by_two() {
        // y=1: A A
        // y=0: B A
        let assignments = vec![
            assign(0, 0, "B (M1)"),
            assign(0, 1, "A (M1)"),
            assign(1, 0, "A (M1)"),
            assign(1, 1, "A (M1)"),
        ];
        let segments = extract_borders(&assignments, &lattice());
        assert_eq!(segments.len(), 2);

        let vertical = &segments[0];
        assert_eq!(vertical.orientation, SegmentOrientation::Vertical);
        assert_eq!(vertical.cell_id, CellId::new(1, 0));
        assert_eq!(vertical.line.start, Coord { x: 1.5, y: 0.5 });
        assert_eq!(vertical.line.end, Coord { x: 1.5, y: 1.5 });

        let horizontal = &segments[1];
        assert_eq!(horizontal.orientation, SegmentOrientation::Horizontal);
        assert_eq!(horizontal.cell_id, CellId::new(0, 1));
        assert_eq!(horizontal.line.start, Coord { x: 0.5, y: 1.5 });
        assert_eq!(horizontal.line.end, Coord { x: 1.5, y: 1.5 });
    }

    #[test]
    fn test_uniform_assignment_has_no_borders() {
        let assignments = vec![
            assign(0, 0, "A (M1)"),
            assign(0, 1, "A (M1)"),
            assign(1, 0, "A (M1)"),
            assign(1, 1, "A (M1)"),
        ];
        assert!(extract_borders(&assignments, &lattice()).is_empty());
    }

    #[test]
    fn test_missing_neighbour_is_not_a_border() {
        let assignments = vec![assign(1, 1, "A (M1)"), assign(0, 0, "B (M2)")];
        assert!(extract_borders(&assignments, &lattice()).is_empty());
    }

    #[test]
    fn test_raw_ids_are_compared() {
        // aliases of one station still produce a border
        let assignments = vec![assign(0, 0, "LORETO M1 (M1)"), assign(1, 0, "LORETO M2 (M2)")];
        let segments = extract_borders(&assignments, &lattice());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].orientation, SegmentOrientation::Vertical);
    }
}
