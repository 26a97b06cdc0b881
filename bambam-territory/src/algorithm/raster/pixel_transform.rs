use crate::model::{
    grid::{BoundingBox, Lattice},
    TerritoryError,
};
use geo::Point;
use std::ops::Range;

/// affine mapping from geographic coordinates onto an image of fixed width. the
/// extent is assumed small enough that curvature can be ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelTransform {
    extent: BoundingBox,
    pub width: u32,
    pub height: u32,
    /// pixel size of one grid cell along x and y, usually fractional
    pub cell_width: f64,
    pub cell_height: f64,
}

impl PixelTransform {
    /// the height follows the extent aspect ratio, truncated to whole pixels
    pub fn new(lattice: &Lattice, width: u32) -> Result<PixelTransform, TerritoryError> {
        let extent = lattice.extent;
        let height = (width as f64 * extent.height() / extent.width()) as u32;
        if width == 0 || height == 0 {
            return Err(TerritoryError::ConfigurationError(format!(
                "raster of width {width} over extent {extent:?} has no pixels"
            )));
        }
        let cell_width = width as f64 / (extent.width() / lattice.step);
        let cell_height = height as f64 / (extent.height() / lattice.step);
        Ok(PixelTransform {
            extent,
            width,
            height,
            cell_width,
            cell_height,
        })
    }

    /// image coordinates of a point, with y growing downwards
    pub fn to_pixel(&self, point: &Point<f64>) -> (f64, f64) {
        let x = (point.x() - self.extent.min_x) * self.width as f64 / self.extent.width();
        let y = (self.extent.max_y - point.y()) * self.height as f64 / self.extent.height();
        (x, y)
    }

    /// columns and rows covered by a cell rectangle anchored at `(x, y)`
    pub fn cell_span(&self, x: f64, y: f64) -> (Range<u32>, Range<u32>) {
        (
            pixel_span(x, self.cell_width, self.width),
            pixel_span(y, self.cell_height, self.height),
        )
    }
}

/// half-open span `[floor(start), floor(start + size))`, at least one pixel wide and
/// clipped to `[0, limit)`
fn pixel_span(start: f64, size: f64, limit: u32) -> Range<u32> {
    let lo = start.floor();
    let hi = (start + size).floor().max(lo + 1.0);
    let clip = |v: f64| v.clamp(0.0, limit as f64) as u32;
    clip(lo)..clip(hi)
}
