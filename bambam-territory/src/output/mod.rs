mod csv_ops;
pub mod filenames;
mod geojson_ops;
mod image_ops;

pub use csv_ops::{read_csv, write_csv};
pub use geojson_ops::{territory_filename, write_borders, write_territories};
pub use image_ops::write_heatmap;
