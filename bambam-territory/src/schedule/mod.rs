mod facility_ops;
mod schedule_error;

pub use facility_ops::{facilities_from_gtfs, read_facilities, route_type_code};
pub use schedule_error::ScheduleError;
