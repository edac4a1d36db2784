//! Flat-file JSON dataset reader.
//!
//! Each logical [`Dataset`] maps to one JSON array file inside the data directory.
//! Reads here report failures as [`Error`]s; deciding to fall back to an empty
//! collection is left to the caller (see [`super::load_snapshot`]).

use crate::entities::{ProductAssignment, ProductCharge};
use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// The logical datasets the service reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    /// Products attached to reservations
    Assignments,
    /// Charges recorded against those products
    Charges,
}

impl Dataset {
    /// File name of the dataset inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Assignments => "product_assignment.json",
            Self::Charges => "product_charges.json",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignments => f.write_str("product assignments"),
            Self::Charges => f.write_str("product charges"),
        }
    }
}

/// Reads datasets from a directory of JSON files.
#[derive(Clone, Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `data_dir`. The directory is not touched until a read.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory the datasets are read from.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of `dataset` inside the data directory.
    #[must_use]
    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(dataset.file_name())
    }

    /// Reads and decodes one dataset as a JSON array of `T`.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::DatasetParse`] if its content is not a valid array of `T`.
    #[instrument(skip(self), fields(path = %self.path_of(dataset).display()))]
    pub async fn read_dataset<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>> {
        let contents = tokio::fs::read_to_string(self.path_of(dataset)).await?;
        let records: Vec<T> =
            serde_json::from_str(&contents).map_err(|e| Error::DatasetParse {
                dataset: dataset.to_string(),
                message: e.to_string(),
            })?;
        debug!("Read {} records from {}", records.len(), dataset);
        Ok(records)
    }

    /// Reads the product assignments dataset.
    ///
    /// # Errors
    /// See [`JsonStore::read_dataset`].
    pub async fn load_assignments(&self) -> Result<Vec<ProductAssignment>> {
        self.read_dataset(Dataset::Assignments).await
    }

    /// Reads the product charges dataset.
    ///
    /// # Errors
    /// See [`JsonStore::read_dataset`].
    pub async fn load_charges(&self) -> Result<Vec<ProductCharge>> {
        self.read_dataset(Dataset::Charges).await
    }
}
