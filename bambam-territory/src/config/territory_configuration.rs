use super::{
    defaults, OracleConfiguration, RasterConfiguration, ScheduleConfiguration,
    TerritoryBuildConfiguration,
};
use crate::model::{
    grid::{BoundingBox, Lattice},
    TerritoryError,
};
use serde::{Deserialize, Serialize};

/// all settings of a territory run. the default is the Milan metro study area.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TerritoryConfiguration {
    pub grid: Lattice,
    #[serde(default)]
    pub oracle: OracleConfiguration,
    #[serde(default)]
    pub schedule: ScheduleConfiguration,
    #[serde(default)]
    pub territory: TerritoryBuildConfiguration,
    #[serde(default)]
    pub raster: RasterConfiguration,
}

impl Default for TerritoryConfiguration {
    fn default() -> Self {
        let extent = BoundingBox {
            min_x: defaults::MIN_X,
            max_x: defaults::MAX_X,
            min_y: defaults::MIN_Y,
            max_y: defaults::MAX_Y,
        };
        Self {
            grid: Lattice {
                extent,
                step: defaults::STEP,
            },
            oracle: Default::default(),
            schedule: Default::default(),
            territory: Default::default(),
            raster: Default::default(),
        }
    }
}

impl TerritoryConfiguration {
    pub fn validate(&self) -> Result<(), TerritoryError> {
        self.grid
            .validate()
            .map_err(|e| TerritoryError::ConfigurationError(format!("grid: {e}")))?;
        self.oracle.validate()?;
        self.schedule.validate()?;
        self.territory.validate()?;
        self.raster.validate()?;
        Ok(())
    }

    /// reads an optional configuration file, falling back to the default study area.
    pub fn from_optional_file(f: Option<&String>) -> Result<Self, TerritoryError> {
        let conf = match f {
            Some(f) => TerritoryConfiguration::try_from(f)?,
            None => {
                log::info!("no configuration file provided, using the default study area");
                TerritoryConfiguration::default()
            }
        };
        conf.validate()?;
        Ok(conf)
    }
}

impl TryFrom<&String> for TerritoryConfiguration {
    type Error = TerritoryError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TerritoryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TerritoryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TerritoryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TerritoryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TerritoryError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TerritoryConfiguration;
    use crate::model::{facility::FacilityId, travel::TransportMode, TerritoryError};

    #[test]
    fn test_default_is_valid() {
        let conf = TerritoryConfiguration::default();
        conf.validate().unwrap();
        assert_eq!(conf.grid.columns(), 574);
        assert_eq!(conf.grid.rows(), 362);
        assert_eq!(conf.oracle.departure.to_string(), "2025-02-06 15:10:00");
        let loreto = FacilityId::from("LORETO M1 (M1)");
        assert_eq!(
            conf.territory.aliases.collapse(&loreto).as_str(),
            "LORETO M2 (M2)"
        );
    }

    #[test]
    fn test_milano_toml() {
        let f = format!(
            "{}/src/util/bambam-territory-milano.toml",
            env!("CARGO_MANIFEST_DIR")
        );
        let conf = TerritoryConfiguration::try_from(&f).unwrap();
        conf.validate().unwrap();
        assert_eq!(conf.oracle.chunk_size, 5000);
        assert_eq!(
            conf.oracle.modes,
            vec![TransportMode::Walk, TransportMode::Bus, TransportMode::Tram]
        );
        assert_eq!(conf.schedule.route_types, vec![1]);
        assert_eq!(conf.territory.aliases.len(), 3);
        assert_eq!(conf.raster.capped_color, [100, 100, 100]);
        assert_eq!(conf.grid, TerritoryConfiguration::default().grid);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.json");
        let conf = TerritoryConfiguration::default();
        std::fs::write(&path, serde_json::to_string_pretty(&conf).unwrap()).unwrap();
        let f = path.to_string_lossy().to_string();
        let read = TerritoryConfiguration::try_from(&f).unwrap();
        assert_eq!(read, conf);
    }

    #[test]
    fn test_invalid_area_of_interest() {
        let mut conf = TerritoryConfiguration::default();
        conf.territory.area_of_interest = String::from("LINESTRING (0 0, 1 1)");
        let result = conf.validate();
        assert!(matches!(result, Err(TerritoryError::InvalidAreaOfInterest(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let f = String::from("territory.yaml");
        assert!(TerritoryConfiguration::try_from(&f).is_err());
    }
}
