#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory incident table for the crime dashboard engine.
//!
//! The [`Dataset`] is loaded once at startup from a CSV source and is
//! read-only for the rest of the process lifetime. Alongside the records it
//! carries the set of jurisdictions present in the data, used to validate
//! filter requests and to populate a jurisdiction selector.

mod loader;

use std::path::Path;

use crime_dash_models::CrimeRecord;
use thiserror::Error;

/// Sentinel jurisdiction selecting every record in the dataset.
pub const ALL_JURISDICTIONS: &str = "All Jurisdictions";

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV source could not be read or parsed at the transport level.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },

    /// A row holds a malformed or missing required value. Rows are never
    /// silently dropped; the first bad row fails the whole load.
    #[error("row {line}: {message}")]
    InvalidRow {
        /// Line number of the offending row in the source file.
        line: u64,
        /// Description of what was malformed.
        message: String,
    },
}

/// The immutable incident table plus its jurisdiction set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CrimeRecord>,
    /// Sorted, deduplicated jurisdiction names present in `records`.
    jurisdictions: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from already-parsed records, collecting the
    /// jurisdiction set from them.
    #[must_use]
    pub fn new(records: Vec<CrimeRecord>) -> Self {
        let mut jurisdictions: Vec<String> =
            records.iter().map(|r| r.jurisdiction.clone()).collect();
        jurisdictions.sort_unstable();
        jurisdictions.dedup();

        Self {
            records,
            jurisdictions,
        }
    }

    /// Loads a dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the file cannot be read, a required
    /// column is missing, or any row is malformed.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv(reader)
    }

    /// Loads a dataset from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if a required column is missing or any row
    /// is malformed.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, DatasetError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: std::io::Read>(reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let records = loader::read_records(reader)?;
        let dataset = Self::new(records);
        log::debug!(
            "loaded {} records across {} jurisdictions",
            dataset.records.len(),
            dataset.jurisdictions.len()
        );
        Ok(dataset)
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[CrimeRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the given jurisdiction appears in the dataset.
    #[must_use]
    pub fn has_jurisdiction(&self, name: &str) -> bool {
        self.jurisdictions
            .binary_search_by(|j| j.as_str().cmp(name))
            .is_ok()
    }

    /// The jurisdiction selector list: the [`ALL_JURISDICTIONS`] sentinel
    /// first, then every jurisdiction in the data, sorted.
    #[must_use]
    pub fn jurisdictions(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.jurisdictions.len() + 1);
        list.push(ALL_JURISDICTIONS.to_owned());
        list.extend(self.jurisdictions.iter().cloned());
        list
    }
}
