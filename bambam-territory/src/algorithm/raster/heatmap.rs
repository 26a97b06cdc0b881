use super::{ColorMap, PixelTransform};
use crate::{
    config::RasterConfiguration,
    model::{grid::Lattice, travel::NearestAssignment, TerritoryError},
};
use image::{Rgb, RgbImage};
use kdam::tqdm;

/// color of a cell by its nearest-facility travel time in minutes. times under one
/// minute are drawn as unreachable and times past the end of the scale are capped.
pub fn bucket_color(total_time: f64, config: &RasterConfiguration, cmap: &dyn ColorMap) -> [u8; 3] {
    if total_time < 1.0 {
        config.unreachable_color
    } else if total_time <= config.max_scale_time {
        cmap.rgb(total_time / config.max_scale_time)
    } else {
        config.capped_color
    }
}

/// paints one rectangle per assigned cell onto a background of the unreachable color.
/// no anti-aliasing, later cells overwrite earlier ones where rectangles overlap.
pub fn render_heatmap(
    assignments: &[NearestAssignment],
    lattice: &Lattice,
    config: &RasterConfiguration,
    cmap: &dyn ColorMap,
) -> Result<RgbImage, TerritoryError> {
    let transform = PixelTransform::new(lattice, config.width)?;
    log::info!(
        "rendering {} cells onto a {}x{} raster ({:.2}x{:.2} pixels per cell)",
        assignments.len(),
        transform.width,
        transform.height,
        transform.cell_width,
        transform.cell_height
    );
    let mut image = RgbImage::from_pixel(
        transform.width,
        transform.height,
        Rgb(config.unreachable_color),
    );
    let cell_iter = tqdm!(
        assignments.iter(),
        desc = "heatmap cells",
        total = assignments.len()
    );
    for assignment in cell_iter {
        let color = Rgb(bucket_color(assignment.total_time, config, cmap));
        let (x, y) = transform.to_pixel(&lattice.center_of(&assignment.cell_id));
        let (columns, rows) = transform.cell_span(x, y);
        for py in rows {
            for px in columns.clone() {
                image.put_pixel(px, py, color);
            }
        }
    }
    eprintln!();
    Ok(image)
}
