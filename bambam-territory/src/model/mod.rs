pub mod facility;
pub mod grid;
mod territory_error;
pub mod travel;

pub use territory_error::TerritoryError;
