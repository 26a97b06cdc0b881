mod color_map;
mod heatmap;
mod pixel_transform;
mod viridis_table;

pub use color_map::{viridis, ColorMap, GradientColorMap};
pub use heatmap::{bucket_color, render_heatmap};
pub use pixel_transform::PixelTransform;
