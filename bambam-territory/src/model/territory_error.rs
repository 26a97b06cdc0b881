use crate::{oracle::OracleError, schedule::ScheduleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerritoryError {
    #[error("invalid territory configuration: {0}")]
    ConfigurationError(String),
    #[error("no color configured for line code {code:?} of facility '{facility}'")]
    UnknownLineColor {
        facility: String,
        code: Option<String>,
    },
    #[error("origin identifier is not a grid cell id: {0}")]
    InvalidCellId(String),
    #[error("area of interest WKT is not a valid polygon: {0}")]
    InvalidAreaOfInterest(String),
    #[error("failure computing travel times: {source}")]
    OracleError {
        #[from]
        source: OracleError,
    },
    #[error("failure reading schedule data: {source}")]
    ScheduleError {
        #[from]
        source: ScheduleError,
    },
    #[error("failure reading {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing image {0}: {1}")]
    ImageWriteError(String, image::ImageError),
    #[error("failure on file system: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
