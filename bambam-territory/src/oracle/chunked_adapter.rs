use super::{ChunkCache, ChunkCacheKey, OracleError, OracleRequest, OracleWarning, RoutingOracle};
use crate::model::{
    facility::Facility,
    grid::GridCell,
    travel::{TransportMode, TravelRecord},
};
use chrono::NaiveDateTime;
use kdam::tqdm;

/// splits a large origin set into fixed-size chunks, sends each chunk to the oracle
/// against the full destination set, and concatenates the results in chunk order.
/// with a cache attached, completed chunks are persisted and skipped on the next run.
pub struct ChunkedOracleAdapter<'a, O: RoutingOracle> {
    oracle: &'a O,
    chunk_size: usize,
    cache: Option<ChunkCache>,
}

impl<'a, O: RoutingOracle> ChunkedOracleAdapter<'a, O> {
    pub fn new(oracle: &'a O, chunk_size: usize) -> Result<ChunkedOracleAdapter<'a, O>, OracleError> {
        if chunk_size == 0 {
            return Err(OracleError::InvalidParameter(String::from(
                "chunk size must be positive",
            )));
        }
        Ok(ChunkedOracleAdapter {
            oracle,
            chunk_size,
            cache: None,
        })
    }

    pub fn with_cache(self, cache: ChunkCache) -> ChunkedOracleAdapter<'a, O> {
        ChunkedOracleAdapter {
            cache: Some(cache),
            ..self
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// computes travel times for every origin. schedule window warnings are dropped,
    /// other warnings are logged, and the first oracle error aborts the run. chunks
    /// completed before the error remain in the cache.
    pub fn compute(
        &self,
        origins: &[GridCell],
        destinations: &[Facility],
        departure: NaiveDateTime,
        modes: &[TransportMode],
    ) -> Result<Vec<TravelRecord>, OracleError> {
        let n_chunks = origins.len().div_ceil(self.chunk_size);
        log::info!(
            "computing travel times for {} origins and {} destinations in {} chunks of size {}",
            origins.len(),
            destinations.len(),
            n_chunks,
            self.chunk_size
        );
        if let Some(cache) = &self.cache {
            cache.prepare(&ChunkCacheKey::new(origins, destinations, departure, modes))?;
        }
        let chunk_iter = tqdm!(
            origins.chunks(self.chunk_size).enumerate(),
            desc = "travel time chunks",
            total = n_chunks
        );
        let mut result = vec![];
        let mut n_reused = 0;
        for (chunk_idx, chunk) in chunk_iter {
            let offset = chunk_idx * self.chunk_size;
            if let Some(records) = self.load_cached(offset)? {
                n_reused += 1;
                result.extend(records);
                continue;
            }
            let request = OracleRequest {
                origins: chunk,
                destinations,
                departure,
                modes,
            };
            let response = self.oracle.compute_travel_times(&request)?;
            report_warnings(&response.warnings, offset);
            if let Some(cache) = &self.cache {
                cache.store(offset, &response.records)?;
            }
            result.extend(response.records);
        }
        eprintln!();
        if n_reused > 0 {
            log::info!("reused {n_reused} of {n_chunks} chunks from the cache");
        }
        Ok(result)
    }

    fn load_cached(&self, offset: usize) -> Result<Option<Vec<TravelRecord>>, OracleError> {
        match &self.cache {
            Some(cache) => cache.load(offset),
            None => Ok(None),
        }
    }
}

fn report_warnings(warnings: &[OracleWarning], offset: usize) {
    for warning in warnings.iter() {
        if warning.is_schedule_window_noise() {
            log::debug!("chunk {offset}: ignoring oracle warning: {warning}");
        } else {
            log::warn!("chunk {offset}: {warning}");
        }
    }
}
