mod territory_app;
mod territory_operation;
pub mod territory_ops;

pub use territory_app::TerritoryApp;
pub use territory_operation::{OracleArguments, TerritoryOperation};
