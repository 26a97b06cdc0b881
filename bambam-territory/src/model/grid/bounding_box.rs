use geo::{coord, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// axis-aligned sampling extent in WGS84 degrees (x = longitude, y = latitude).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<BoundingBox, String> {
        let bbox = BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [self.min_x, self.max_x, self.min_y, self.max_y];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(format!("bounding box has non-finite values: {self:?}"));
        }
        if self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(format!(
                "bounding box minimums must be less than maximums: {self:?}"
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_x, y: self.min_y },
            coord! { x: self.max_x, y: self.max_y },
        )
    }

    pub fn as_polygon(&self) -> Polygon<f64> {
        self.as_rect().to_polygon()
    }

    /// true when `other` lies inside this (closed) box. used to filter Voronoi cells
    /// that were blown outward by floating-point error near the diagram boundary.
    pub fn contains_rect(&self, other: &Rect<f64>) -> bool {
        let (min, max) = (other.min(), other.max());
        self.min_x <= min.x && max.x <= self.max_x && self.min_y <= min.y && max.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;
    use geo::{coord, Rect};

    #[test]
    fn test_rejects_inverted_extent() {
        assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_contains_rect_is_closed() {
        let bbox = BoundingBox::new(0.0, 2.0, 0.0, 1.0).unwrap();
        let touching = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 });
        let escaping = Rect::new(coord! { x: 0.5, y: 0.5 }, coord! { x: 2.5, y: 0.9 });
        assert!(bbox.contains_rect(&touching));
        assert!(!bbox.contains_rect(&escaping));
    }
}
