mod territory;
mod territory_builder;
mod voronoi_diagram;
mod voronoi_region;

pub use territory::Territory;
pub use territory_builder::build_territories;
pub use voronoi_diagram::VoronoiDiagram;
pub use voronoi_region::VoronoiRegion;
