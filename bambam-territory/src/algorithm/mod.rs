pub mod border;
pub mod nearest;
pub mod raster;
pub mod voronoi;
