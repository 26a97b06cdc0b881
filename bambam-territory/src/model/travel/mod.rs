mod nearest_assignment;
mod transport_mode;
mod travel_record;

pub use nearest_assignment::NearestAssignment;
pub use transport_mode::TransportMode;
pub use travel_record::TravelRecord;
