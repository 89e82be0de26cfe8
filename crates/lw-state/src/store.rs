//! Persisted pool slot
//!
//! A single last-write-wins slot holding the remaining values as a JSON array
//! in display order:
//! - `JsonFileStore`: one `<slot>.json` file in a data directory
//! - `MemoryStore`: in-process slot for tests and embedding
//!
//! Stores move raw strings; decoding lives in [`decode_values`] so malformed
//! payloads can be recovered from rather than failing the load.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lw_wheel::{Pool, PoolGenerator, StorageConfig};
use parking_lot::Mutex;

use crate::error::StoreResult;

/// Durable single-slot storage
pub trait PoolStore {
    /// Raw slot contents, `None` when nothing has been stored
    fn load(&self) -> StoreResult<Option<String>>;
    /// Replace the slot contents
    fn save(&self, payload: &str) -> StoreResult<()>;
    /// Empty the slot
    fn clear(&self) -> StoreResult<()>;
}

impl<S: PoolStore + ?Sized> PoolStore for &S {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        (**self).save(payload)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

// ============ Codec ============

/// Serialize values as a JSON array
pub fn encode_values(values: &[i64]) -> StoreResult<String> {
    Ok(serde_json::to_string(values)?)
}

/// Parse a stored payload
///
/// Returns `None` when the payload is not a JSON array of integers or is
/// empty; callers fall back to the default pool.
pub fn decode_values(raw: &str) -> Option<Vec<i64>> {
    match serde_json::from_str::<Vec<i64>>(raw) {
        Ok(values) if !values.is_empty() => Some(values),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Failed to parse stored wheel numbers: {}", e);
            None
        }
    }
}

// ============ Adapter ============

/// Restore the pool from `store`, or the generator's default pool
///
/// Unreadable, malformed, empty or duplicate-containing slots all recover to
/// the default pool; none of these reach the user.
pub fn load_pool<S: PoolStore + ?Sized>(store: &S, generator: &PoolGenerator) -> Pool {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return generator.default_pool(),
        Err(e) => {
            log::warn!("Failed to read stored wheel numbers: {}", e);
            return generator.default_pool();
        }
    };

    let Some(values) = decode_values(&raw) else {
        return generator.default_pool();
    };

    let pool = generator.generate(&values);
    if let Err(e) = pool.ensure_unique() {
        log::warn!("Discarding stored wheel numbers: {}", e);
        return generator.default_pool();
    }

    log::info!("Restored {} wheel numbers", pool.len());
    pool
}

/// Write the pool's values; failures are logged, not returned
pub fn save_pool<S: PoolStore + ?Sized>(store: &S, pool: &Pool) {
    let result = encode_values(&pool.values()).and_then(|payload| store.save(&payload));
    if let Err(e) = result {
        log::warn!("Failed to persist wheel numbers: {}", e);
    }
}

/// Empty the slot; failures are logged, not returned
pub fn clear_pool<S: PoolStore + ?Sized>(store: &S) {
    if let Err(e) = store.clear() {
        log::warn!("Failed to clear stored wheel numbers: {}", e);
    }
}

// ============ File Store ============

/// Slot stored as `<dir>/<slot>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>, slot: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{slot}.json")),
        }
    }

    /// Store at the configured directory, or [`Self::default_dir`]
    pub fn from_config(config: &StorageConfig) -> Self {
        let dir = config.dir.clone().unwrap_or_else(Self::default_dir);
        Self::new(dir, &config.slot)
    }

    /// Platform data directory for the wheel
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("lucky-wheel"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PoolStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============ Memory Store ============

/// In-process slot
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `payload`
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }

    /// Current slot contents
    pub fn payload(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl PoolStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        *self.slot.lock() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}
