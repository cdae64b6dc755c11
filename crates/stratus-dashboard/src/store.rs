//! Storage backends for the pinned-city list.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use stratus_cities::City;
use thiserror::Error;

/// Dashboard storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Stored dashboard is corrupt: {0}")]
    Corrupt(String),
}

impl From<StoreError> for stratus_core::AppError {
    fn from(e: StoreError) -> Self {
        use stratus_core::{AppError, StorageError};

        match e {
            StoreError::Read(msg) => AppError::Storage(StorageError::ReadFailed(msg)),
            StoreError::Write(msg) => AppError::Storage(StorageError::WriteFailed(msg)),
            StoreError::Corrupt(msg) => AppError::Storage(StorageError::Corrupt(msg)),
        }
    }
}

/// Repository seam for the pinned-city list.
///
/// The list is one durable slot: `load` reads it whole, `save` replaces
/// it whole. There are no partial updates.
pub trait DashboardStore {
    fn load(&self) -> Result<Vec<City>, StoreError>;
    fn save(&self, cities: &[City]) -> Result<(), StoreError>;
}

/// File-backed store: the whole list as one JSON document.
///
/// An absent file loads as the empty list; that is the fresh-install
/// state, not an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DashboardStore for JsonFileStore {
    fn load(&self) -> Result<Vec<City>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn save(&self, cities: &[City]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        let json = serde_json::to_string(cities).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write(e.to_string()))
    }
}

/// In-memory store (for testing).
#[derive(Debug, Default)]
pub struct MemoryStore {
    cities: Mutex<Vec<City>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities: Mutex::new(cities),
        }
    }
}

impl DashboardStore for MemoryStore {
    fn load(&self) -> Result<Vec<City>, StoreError> {
        self.cities
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    fn save(&self, cities: &[City]) -> Result<(), StoreError> {
        self.cities
            .lock()
            .map(|mut guard| *guard = cities.to_vec())
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}
