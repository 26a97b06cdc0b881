#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to parse gtfs bundle file into `Gtfs` struct: {0}")]
    BundleReadError(#[from] gtfs_structures::Error),
    #[error("no routes in '{0}' match route types {1:?}")]
    NoMatchingRoutes(String, Vec<i16>),
    #[error("no stops with coordinates found for the selected routes in '{0}'")]
    NoFacilitiesFound(String),
}
