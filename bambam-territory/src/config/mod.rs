pub mod defaults;
mod oracle_configuration;
mod raster_configuration;
mod schedule_configuration;
mod territory_build_configuration;
mod territory_configuration;

pub use oracle_configuration::OracleConfiguration;
pub use raster_configuration::RasterConfiguration;
pub use schedule_configuration::ScheduleConfiguration;
pub use territory_build_configuration::TerritoryBuildConfiguration;
pub use territory_configuration::TerritoryConfiguration;
