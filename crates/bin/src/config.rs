//! Application configuration file.
//!
//! ```json
//! {
//!   "stock_analysis": {
//!     "stocks_to_analyze": ["AAPL", "MSFT"],
//!     "top_stocks_count": 10,
//!     "min_notification_score": 7
//!   },
//!   "scoring": { "weights": { "pe_ratio": 0.25 }, "neutral_score": 5.0 }
//! }
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use fundamenta::WatchList;
use fundamenta_scoring::{RankingConfig, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors reading the configuration file.
#[derive(Debug, Error)]
pub(crate) enum ConfigFileError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Run selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StockAnalysis {
    /// Symbols to analyse; empty means every company in the input
    pub(crate) stocks_to_analyze: WatchList,
    /// Companies shown in the top-N table and chart
    pub(crate) top_stocks_count: usize,
    /// Minimum composite score for an alert
    pub(crate) min_notification_score: f64,
}

impl Default for StockAnalysis {
    fn default() -> Self {
        let ranking = RankingConfig::default();
        Self {
            stocks_to_analyze: WatchList::default(),
            top_stocks_count: ranking.top_n,
            min_notification_score: ranking.min_score,
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// Run selection settings
    pub(crate) stock_analysis: StockAnalysis,
    /// Weights, bands and neutral score
    pub(crate) scoring: ScoringConfig,
}

impl AppConfig {
    /// Parse a configuration from JSON text.
    pub(crate) fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigFileError> {
        serde_json::from_str(json).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration file, or the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigFileError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json, path)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Symbols to analyse, with `--symbols` taking precedence.
    pub(crate) fn watch_list(&self, symbols: &[String]) -> WatchList {
        if symbols.is_empty() {
            self.stock_analysis.stocks_to_analyze.clone()
        } else {
            WatchList::new(symbols)
        }
    }

    /// Selection parameters, with `--top` and `--min-score` taking precedence.
    pub(crate) fn ranking(&self, top: Option<usize>, min_score: Option<f64>) -> RankingConfig {
        RankingConfig::default()
            .with_top_n(top.unwrap_or(self.stock_analysis.top_stocks_count))
            .with_min_score(min_score.unwrap_or(self.stock_analysis.min_notification_score))
    }
}
