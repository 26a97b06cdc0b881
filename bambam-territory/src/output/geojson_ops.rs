use crate::{
    algorithm::{border::BorderSegment, voronoi::Territory},
    model::TerritoryError,
};
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject, JsonValue};
use itertools::Itertools;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// writes the border segments as a FeatureCollection of two-point LineStrings with
/// empty properties
pub fn write_borders(path: &Path, segments: &[BorderSegment]) -> Result<(), TerritoryError> {
    let features = segments
        .iter()
        .map(|segment| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &segment.as_line_string(),
            ))),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        })
        .collect_vec();
    write_collection(path, features)?;
    log::info!(
        "wrote {} border segments to {}",
        segments.len(),
        path.to_string_lossy()
    );
    Ok(())
}

/// writes one geometry file per territory plus the combined FeatureCollection, which
/// carries a numeric `id` and the `name` and `color` properties. returns the paths
/// written.
pub fn write_territories(
    directory: &Path,
    territories: &[Territory],
    combined_filename: &str,
) -> Result<Vec<PathBuf>, TerritoryError> {
    let filenames = territory_filenames(territories, combined_filename)?;
    std::fs::create_dir_all(directory)?;
    let mut written = vec![];
    for (territory, filename) in territories.iter().zip(filenames) {
        let path = directory.join(filename);
        let geometry = geojson::Geometry::new(geojson::Value::from(&territory.geometry));
        std::fs::write(&path, serde_json::to_string(&geometry)?)?;
        written.push(path);
    }

    let features = territories
        .iter()
        .enumerate()
        .map(|(idx, territory)| {
            let mut properties = JsonObject::new();
            properties.insert(
                String::from("name"),
                JsonValue::from(territory.key.to_string()),
            );
            properties.insert(
                String::from("color"),
                JsonValue::from(territory.color.clone()),
            );
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &territory.geometry,
                ))),
                id: Some(Id::Number(serde_json::Number::from(idx))),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect_vec();
    let combined = directory.join(combined_filename);
    write_collection(&combined, features)?;
    written.push(combined);
    log::info!(
        "wrote {} territories to {}",
        territories.len(),
        directory.to_string_lossy()
    );
    Ok(written)
}

/// facility identities may contain path separators
pub fn territory_filename(key: &str) -> String {
    format!("{}.json", key.replace(['/', '\\'], "_"))
}

/// one file name per territory, in order. two keys that sanitize to the same name,
/// or a key that would replace the combined file, are rejected before anything is
/// written.
fn territory_filenames(
    territories: &[Territory],
    combined_filename: &str,
) -> Result<Vec<String>, TerritoryError> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut filenames = Vec::with_capacity(territories.len());
    for territory in territories.iter() {
        let key = territory.key.as_str();
        let filename = territory_filename(key);
        if filename == combined_filename {
            return Err(TerritoryError::ConfigurationError(format!(
                "territory '{key}' would overwrite the combined file {combined_filename}"
            )));
        }
        if let Some(other) = owners.insert(filename.clone(), key) {
            return Err(TerritoryError::ConfigurationError(format!(
                "territories '{other}' and '{key}' both map to file {filename}"
            )));
        }
        filenames.push(filename);
    }
    Ok(filenames)
}

fn write_collection(path: &Path, features: Vec<Feature>) -> Result<(), TerritoryError> {
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    std::fs::write(path, serde_json::to_string(&collection)?)?;
    Ok(())
}
