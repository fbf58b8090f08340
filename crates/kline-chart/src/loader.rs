//! Dataset loading.
//!
//! Per-ticker data lives in JSON documents of the form
//! `{ "name": "...", "data": [ { "time": "2024-01-02", "open": 10.0, ... } ] }`
//! with one object per trading day. Loading is the boundary where the
//! ascending-unique-date contract is checked; everything downstream assumes
//! it holds.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kline_core::bar::{validate_bars, Bar};
use kline_core::error::KlineError;

/// Errors from reading or decoding a dataset file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid dataset JSON.
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    /// The bar sequence violates the date contract.
    #[error("invalid dataset: {0}")]
    Data(#[from] KlineError),
}

/// A named bar sequence as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Display name of the instrument.
    pub name: String,
    /// Ascending daily bars.
    pub data: Vec<Bar>,
}

impl Dataset {
    /// Read and validate a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read and validate a dataset from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        validate_bars(&dataset.data)?;
        Ok(dataset)
    }

    /// Parse and validate a dataset from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_reader(json.as_bytes())
    }
}
