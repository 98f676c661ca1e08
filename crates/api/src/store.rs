//! In-memory report dataset served by the mock backend.
//!
//! The dataset is loaded and validated once at startup and never mutated
//! afterwards, so handlers share it through an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use raildash_core::error::CoreError;
use raildash_core::mock::MOCK_TRAIN_DATA;
use raildash_core::report::{decode_collection, TrainReport};

/// Errors raised while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: CoreError,
    },
}

/// Immutable, ordered report collection with an id index.
#[derive(Debug)]
pub struct TrainDataStore {
    reports: Vec<TrainReport>,
    by_id: HashMap<String, usize>,
}

impl TrainDataStore {
    /// Build a store from an already-validated collection.
    ///
    /// Identifiers must be unique; [`decode_collection`] guarantees this.
    pub fn new(reports: Vec<TrainReport>) -> Self {
        let by_id = reports
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.train_id.clone(), idx))
            .collect();
        Self { reports, by_id }
    }

    /// The built-in mock dataset.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(MOCK_TRAIN_DATA.as_bytes(), "<builtin>")
    }

    /// Load and validate a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&bytes, &path.display().to_string())
    }

    fn from_json(bytes: &[u8], origin: &str) -> Result<Self, StoreError> {
        let reports = decode_collection(bytes).map_err(|source| StoreError::Invalid {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self::new(reports))
    }

    /// Load from `path` when given, otherwise the built-in mock.
    pub fn load(path: Option<&str>) -> Result<Self, StoreError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::builtin(),
        }
    }

    /// All reports in dataset order.
    pub fn all(&self) -> &[TrainReport] {
        &self.reports
    }

    pub fn get(&self, train_id: &str) -> Option<&TrainReport> {
        self.by_id.get(train_id).map(|&idx| &self.reports[idx])
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
