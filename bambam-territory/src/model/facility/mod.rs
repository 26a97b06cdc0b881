mod alias_table;
#[allow(clippy::module_inception)]
mod facility;
mod facility_id;
mod line_color;

pub use alias_table::AliasTable;
pub use facility::Facility;
pub use facility_id::FacilityId;
pub use line_color::LineColorTable;
