use super::defaults;
use crate::model::{
    facility::{AliasTable, LineColorTable},
    TerritoryError,
};
use geo::Polygon;
use serde::{Deserialize, Serialize};
use wkt::TryFromWkt;

/// controls how Voronoi regions become territories
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TerritoryBuildConfiguration {
    pub aliases: AliasTable,
    pub line_colors: LineColorTable,
    /// WKT polygon, regions not fully inside it are left out of every territory
    pub area_of_interest: String,
    pub vertex_merge_tolerance: f64,
}

impl Default for TerritoryBuildConfiguration {
    fn default() -> Self {
        let aliases = defaults::aliases()
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            aliases: AliasTable::new_unchecked(aliases),
            line_colors: LineColorTable::new(defaults::line_colors()),
            area_of_interest: String::from(defaults::AREA_OF_INTEREST_WKT),
            vertex_merge_tolerance: defaults::VERTEX_MERGE_TOLERANCE,
        }
    }
}

impl TerritoryBuildConfiguration {
    pub fn area_of_interest_polygon(&self) -> Result<Polygon<f64>, TerritoryError> {
        Polygon::try_from_wkt_str(&self.area_of_interest)
            .map_err(|e| TerritoryError::InvalidAreaOfInterest(format!("{e}")))
    }

    pub fn validate(&self) -> Result<(), TerritoryError> {
        let aoi = self.area_of_interest_polygon()?;
        if aoi.exterior().0.len() < 4 {
            return Err(TerritoryError::InvalidAreaOfInterest(String::from(
                "polygon exterior needs at least three distinct points",
            )));
        }
        let chained = self.aliases.chains();
        if !chained.is_empty() {
            return Err(TerritoryError::ConfigurationError(format!(
                "territory.aliases targets must not be aliased themselves, found chains: {}",
                chained.join(", ")
            )));
        }
        if self.line_colors.is_empty() {
            return Err(TerritoryError::ConfigurationError(String::from(
                "territory.line_colors must not be empty",
            )));
        }
        if !self.vertex_merge_tolerance.is_finite() || self.vertex_merge_tolerance < 0.0 {
            return Err(TerritoryError::ConfigurationError(format!(
                "territory.vertex_merge_tolerance must be a non-negative number, found {}",
                self.vertex_merge_tolerance
            )));
        }
        Ok(())
    }
}
