use crate::model::{
    grid::CellId,
    travel::{NearestAssignment, TravelRecord},
    TerritoryError,
};
use indexmap::IndexMap;
use itertools::Itertools;

/// picks the fastest reachable facility for every origin in the record table.
///
/// records without a finite total time are ignored, so origins that reach nothing are
/// absent from the result. ties keep the record that appears first. the output is
/// ordered by the first appearance of each origin.
pub fn reduce_nearest(records: &[TravelRecord]) -> Result<Vec<NearestAssignment>, TerritoryError> {
    let mut best: IndexMap<&str, Option<(&TravelRecord, f64)>> = IndexMap::new();
    for record in records.iter() {
        let entry = best.entry(record.from_id.as_str()).or_insert(None);
        let Some(total) = record.total_time() else {
            continue;
        };
        let improves = match entry {
            Some((_, current)) => total < *current,
            None => true,
        };
        if improves {
            *entry = Some((record, total));
        }
    }
    let n_origins = best.len();
    let assignments = best
        .into_values()
        .flatten()
        .map(|(record, total_time)| {
            let cell_id = record
                .from_id
                .parse::<CellId>()
                .map_err(|_| TerritoryError::InvalidCellId(record.from_id.clone()))?;
            Ok(NearestAssignment {
                cell_id,
                facility_id: record.to_id.clone(),
                total_time,
            })
        })
        .collect::<Result<Vec<_>, TerritoryError>>()?;
    log::info!(
        "assigned a nearest facility to {} of {} origins ({} unreachable)",
        assignments.len(),
        n_origins,
        n_origins - assignments.len()
    );
    log::debug!(
        "{} distinct facilities are nearest to at least one cell",
        assignments.iter().map(|a| &a.facility_id).unique().count()
    );
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::reduce_nearest;
    use crate::model::{
        facility::FacilityId,
        grid::CellId,
        travel::TravelRecord,
        TerritoryError,
    };

    fn record(from: &str, to: &str, travel: Option<f64>, wait: Option<f64>) -> TravelRecord {
        TravelRecord::new(from.to_string(), FacilityId::from(to), travel, wait)
    }

    #[test]
    fn test_minimum_total_time_wins() {
        let records = vec![
            record("0,0", "A (M1)", Some(10.0), Some(0.0)),
            record("0,0", "B (M2)", Some(6.0), Some(3.0)),
            record("0,0", "C (M3)", Some(5.0), Some(5.0)),
            record("0,1", "A (M1)", Some(2.0), Some(1.0)),
        ];
        let result = reduce_nearest(&records).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].cell_id, CellId::new(0, 0));
        assert_eq!(result[0].facility_id.as_str(), "B (M2)");
        assert_eq!(result[0].total_time, 9.0);
        assert_eq!(result[1].cell_id, CellId::new(0, 1));
        assert_eq!(result[1].total_time, 3.0);
    }

    #[test]
    fn test_unreachable_origin_is_dropped() {
        let records = vec![
            record("1,0", "A (M1)", None, None),
            record("1,0", "B (M2)", Some(4.0), None),
            record("1,0", "C (M3)", Some(f64::NAN), Some(0.0)),
            record("2,0", "A (M1)", Some(1.0), Some(1.0)),
        ];
        let result = reduce_nearest(&records).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cell_id, CellId::new(2, 0));
    }

    #[test]
    fn test_first_record_wins_ties() {
        let records = vec![
            record("0,0", "A (M1)", Some(4.0), Some(1.0)),
            record("0,0", "B (M2)", Some(5.0), Some(0.0)),
        ];
        let result = reduce_nearest(&records).unwrap();
        assert_eq!(result[0].facility_id.as_str(), "A (M1)");
    }

    #[test]
    fn test_order_is_first_appearance() {
        let records = vec![
            record("3,3", "A (M1)", Some(4.0), Some(1.0)),
            record("0,0", "A (M1)", Some(5.0), Some(0.0)),
            record("3,3", "B (M2)", Some(1.0), Some(0.0)),
        ];
        let result = reduce_nearest(&records).unwrap();
        assert_eq!(result[0].cell_id, CellId::new(3, 3));
        assert_eq!(result[0].facility_id.as_str(), "B (M2)");
        assert_eq!(result[1].cell_id, CellId::new(0, 0));
    }

    #[test]
    fn test_malformed_origin_id() {
        let records = vec![record("north-west", "A (M1)", Some(1.0), Some(0.0))];
        let result = reduce_nearest(&records);
        assert!(matches!(result, Err(TerritoryError::InvalidCellId(_))));
    }
}
