use crate::model::facility::FacilityId;
use geo::{Geometry, MultiPolygon};

/// dissolved service area of one alias-collapsed facility
#[derive(Clone, Debug, PartialEq)]
pub struct Territory {
    pub key: FacilityId,
    /// a `Polygon` when the dissolve has a single part, otherwise a `MultiPolygon`,
    /// which is empty when no region of this key survived the area of interest filter
    pub geometry: Geometry<f64>,
    pub color: String,
}

impl Territory {
    pub fn new(key: FacilityId, mut dissolved: MultiPolygon<f64>, color: String) -> Territory {
        let geometry = match dissolved.0.len() {
            1 => Geometry::Polygon(dissolved.0.remove(0)),
            _ => Geometry::MultiPolygon(dissolved),
        };
        Territory {
            key,
            geometry,
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.geometry, Geometry::MultiPolygon(mp) if mp.0.is_empty())
    }
}
