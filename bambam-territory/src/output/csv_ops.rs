use crate::model::TerritoryError;
use kdam::tqdm;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// writes rows with a header derived from the row type
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T], desc: &str) -> Result<(), TerritoryError> {
    let filename = path.to_string_lossy().to_string();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| TerritoryError::CsvWriteError(filename.clone(), e))?;
    let row_iter = tqdm!(rows.iter(), desc = desc.to_string(), total = rows.len());
    for row in row_iter {
        writer
            .serialize(row)
            .map_err(|e| TerritoryError::CsvWriteError(filename.clone(), e))?;
    }
    eprintln!();
    writer.flush()?;
    log::info!("wrote {} rows to {filename}", rows.len());
    Ok(())
}

pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TerritoryError> {
    let filename = path.to_string_lossy().to_string();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| TerritoryError::CsvReadError(filename.clone(), e))?;
    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TerritoryError::CsvReadError(filename.clone(), e))?;
    log::info!("read {} rows from {filename}", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{read_csv, write_csv};
    use crate::model::{facility::FacilityId, grid::CellId, travel::NearestAssignment};

    #[test]
    fn test_nearest_table_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nearest.csv");
        let rows = vec![NearestAssignment {
            cell_id: CellId::new(12, 7),
            facility_id: FacilityId::from("LORETO M2 (M2)"),
            total_time: 4.5,
        }];
        write_csv(&path, &rows, "nearest").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "cell_id,facility_id,total_time\n\"12,7\",LORETO M2 (M2),4.5\n"
        );
        let read: Vec<NearestAssignment> = read_csv(&path).unwrap();
        assert_eq!(read, rows);
    }
}
