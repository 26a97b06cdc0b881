mod chunk_cache;
mod chunked_adapter;
mod matrix_oracle;
mod oracle_error;
mod oracle_warning;
mod routing_oracle;
mod walking_oracle;

pub use chunk_cache::{ChunkCache, ChunkCacheKey};
pub use chunked_adapter::ChunkedOracleAdapter;
pub use matrix_oracle::MatrixOracle;
pub use oracle_error::OracleError;
pub use oracle_warning::OracleWarning;
pub use routing_oracle::{OracleRequest, OracleResponse, RoutingOracle};
pub use walking_oracle::WalkingOracle;
