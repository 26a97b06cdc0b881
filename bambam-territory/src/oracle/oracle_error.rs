use crate::model::travel::TransportMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("routing oracle does not support any of the requested modes {0:?}")]
    UnsupportedModes(Vec<TransportMode>),
    #[error("invalid routing oracle parameter: {0}")]
    InvalidParameter(String),
    #[error("failure reading travel time matrix {0}: {1}")]
    MatrixReadError(String, csv::Error),
    #[error("routing oracle failed: {0}")]
    EngineFailure(String),
    #[error("failure reading chunk cache {0}: {1}")]
    CacheReadError(String, csv::Error),
    #[error("failure writing chunk cache {0}: {1}")]
    CacheWriteError(String, csv::Error),
    #[error("failure encoding chunk cache key {0}: {1}")]
    CacheKeyError(String, serde_json::Error),
    #[error("failure accessing chunk cache: {source}")]
    CacheIoError {
        #[from]
        source: std::io::Error,
    },
}
