use super::OracleError;
use crate::model::{
    facility::{Facility, FacilityId},
    grid::GridCell,
    travel::{TransportMode, TravelRecord},
};
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CACHE_KEY_FILENAME: &str = "cache_key.json";

/// the request parameters that chunk contents depend on besides the chunk size.
/// stored next to the chunks so a run with different inputs does not reuse them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChunkCacheKey {
    pub departure: NaiveDateTime,
    pub modes: Vec<TransportMode>,
    pub origins: usize,
    pub first_origin: Option<String>,
    pub last_origin: Option<String>,
    pub destinations: Vec<FacilityId>,
}

impl ChunkCacheKey {
    pub fn new(
        origins: &[GridCell],
        destinations: &[Facility],
        departure: NaiveDateTime,
        modes: &[TransportMode],
    ) -> ChunkCacheKey {
        ChunkCacheKey {
            departure,
            modes: modes.to_vec(),
            origins: origins.len(),
            first_origin: origins.first().map(|c| c.id.to_string()),
            last_origin: origins.last().map(|c| c.id.to_string()),
            destinations: destinations.iter().map(|f| f.id.clone()).collect_vec(),
        }
    }
}

/// on-disk store of completed oracle chunks, one CSV file per chunk keyed by the
/// offset of its first origin. chunk boundaries depend on the chunk size, so each
/// chunk size gets its own subdirectory.
pub struct ChunkCache {
    directory: PathBuf,
}

impl ChunkCache {
    pub fn new(directory: &Path, chunk_size: usize) -> Result<ChunkCache, OracleError> {
        let directory = directory.join(format!("chunk_size_{chunk_size}"));
        std::fs::create_dir_all(&directory)?;
        Ok(ChunkCache { directory })
    }

    /// compares `key` with the key the stored chunks were computed for. on a mismatch
    /// the stored chunks are deleted. the key is written when the cache is fresh.
    pub fn prepare(&self, key: &ChunkCacheKey) -> Result<(), OracleError> {
        let key_path = self.directory.join(CACHE_KEY_FILENAME);
        let key_filename = key_path.to_string_lossy().to_string();
        if key_path.is_file() {
            let stored = std::fs::read_to_string(&key_path)?;
            match serde_json::from_str::<ChunkCacheKey>(&stored) {
                Ok(stored) if stored == *key => return Ok(()),
                _ => {
                    let n_removed = self.clear()?;
                    log::warn!(
                        "chunk cache {} was computed for other departure, modes, origins or destinations; removed {n_removed} stale chunks",
                        self.directory.to_string_lossy()
                    );
                }
            }
        } else {
            let n_removed = self.clear()?;
            if n_removed > 0 {
                log::warn!(
                    "chunk cache {} has no cache key; removed {n_removed} chunks of unknown origin",
                    self.directory.to_string_lossy()
                );
            }
        }
        let encoded = serde_json::to_string_pretty(key)
            .map_err(|e| OracleError::CacheKeyError(key_filename, e))?;
        std::fs::write(&key_path, encoded)?;
        Ok(())
    }

    /// removes every stored chunk along with any partial writes, returning the number
    /// of completed chunks removed
    fn clear(&self) -> Result<usize, OracleError> {
        let mut n_removed = 0;
        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if name.ends_with(".csv") {
                std::fs::remove_file(&path)?;
                n_removed += 1;
            } else if name.ends_with(".csv.tmp") {
                std::fs::remove_file(&path)?;
            }
        }
        Ok(n_removed)
    }

    pub fn chunk_path(&self, offset: usize) -> PathBuf {
        self.directory.join(format!("{offset}.csv"))
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.chunk_path(offset).is_file()
    }

    /// reads a completed chunk, or `None` if the chunk has not been stored yet.
    pub fn load(&self, offset: usize) -> Result<Option<Vec<TravelRecord>>, OracleError> {
        let path = self.chunk_path(offset);
        if !path.is_file() {
            return Ok(None);
        }
        let filename = path.to_string_lossy().to_string();
        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| OracleError::CacheReadError(filename.clone(), e))?;
        let records = reader
            .deserialize::<TravelRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| OracleError::CacheReadError(filename, e))?;
        Ok(Some(records))
    }

    /// writes the chunk next to its final location and renames it into place, so an
    /// interrupted write never leaves a chunk that looks complete.
    pub fn store(&self, offset: usize, records: &[TravelRecord]) -> Result<(), OracleError> {
        let path = self.chunk_path(offset);
        let tmp_path = path.with_extension("csv.tmp");
        let tmp_filename = tmp_path.to_string_lossy().to_string();
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_path(&tmp_path)
            .map_err(|e| OracleError::CacheWriteError(tmp_filename.clone(), e))?;
        for record in records.iter() {
            writer
                .serialize(record)
                .map_err(|e| OracleError::CacheWriteError(tmp_filename.clone(), e))?;
        }
        writer.flush()?;
        drop(writer);
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
