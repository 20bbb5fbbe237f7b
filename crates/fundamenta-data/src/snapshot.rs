//! Snapshot files handed over by the fetch collaborator.
//!
//! A snapshot is the complete set of raw records for one run, plus the
//! symbols the collaborator could not fetch at all. Fetch failures are
//! reported, never raised: the run proceeds over whatever companies arrived.

use crate::error::{DataError, Result};
use crate::financials::RawFinancials;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// A symbol the fetch collaborator could not obtain data for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Symbol that failed
    pub symbol: String,
    /// Provider-reported reason
    pub reason: String,
}

/// The raw input of one screening run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// When the data was fetched
    pub fetched_at: Option<DateTime<Utc>>,
    /// Records that were fetched
    pub companies: Vec<RawFinancials>,
    /// Symbols that could not be fetched
    pub failures: Vec<FetchFailure>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotRepr {
    Full(Snapshot),
    Records(Vec<RawFinancials>),
}

impl Snapshot {
    /// Create a snapshot from fetched records.
    pub const fn new(companies: Vec<RawFinancials>) -> Self {
        Self {
            fetched_at: None,
            companies,
            failures: Vec::new(),
        }
    }

    /// Parse a snapshot from JSON.
    ///
    /// Accepts either the full snapshot object or a bare array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot = match serde_json::from_str::<SnapshotRepr>(json) {
            Ok(SnapshotRepr::Full(snapshot)) => snapshot,
            Ok(SnapshotRepr::Records(companies)) => Self::new(companies),
            // Re-parse as the full form to surface a precise error location.
            Err(_) => serde_json::from_str::<Self>(json)?,
        };
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON file and log any fetch failures it reports.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            companies = snapshot.companies.len(),
            failures = snapshot.failures.len(),
            "loaded snapshot"
        );
        snapshot.log_failures();
        Ok(snapshot)
    }

    /// Emit a warning for every symbol the collaborator failed to fetch.
    pub fn log_failures(&self) {
        for failure in &self.failures {
            warn!(
                symbol = %failure.symbol,
                reason = %failure.reason,
                "skipping company, data could not be fetched"
            );
        }
    }

    /// Symbols of all fetched records, in input order.
    pub fn symbols(&self) -> Vec<String> {
        self.companies.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Number of fetched records.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether no records were fetched.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
