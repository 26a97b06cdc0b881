use super::defaults;
use crate::model::TerritoryError;
use serde::{Deserialize, Serialize};

/// heatmap image settings
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RasterConfiguration {
    /// pixels, the height follows from the grid aspect ratio
    pub width: u32,
    /// minutes mapped to the end of the color scale
    pub max_scale_time: f64,
    pub unreachable_color: [u8; 3],
    pub capped_color: [u8; 3],
}

impl Default for RasterConfiguration {
    fn default() -> Self {
        Self {
            width: defaults::RASTER_WIDTH,
            max_scale_time: defaults::MAX_SCALE_TIME_MINUTES,
            unreachable_color: defaults::UNREACHABLE_COLOR,
            capped_color: defaults::CAPPED_COLOR,
        }
    }
}

impl RasterConfiguration {
    pub fn validate(&self) -> Result<(), TerritoryError> {
        if self.width == 0 {
            return Err(TerritoryError::ConfigurationError(String::from(
                "raster.width must be positive",
            )));
        }
        if !self.max_scale_time.is_finite() || self.max_scale_time < 1.0 {
            return Err(TerritoryError::ConfigurationError(format!(
                "raster.max_scale_time must be at least 1 minute, found {}",
                self.max_scale_time
            )));
        }
        Ok(())
    }
}
