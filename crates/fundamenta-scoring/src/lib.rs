#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamenta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bands;
pub mod breakdown;
pub mod config;
pub mod error;
pub mod ranker;
pub mod result;
pub mod scorer;

pub use bands::{BandSet, Bands, DEFAULT_NEUTRAL_SCORE, MAX_SCORE, MIN_SCORE};
pub use breakdown::{ScoreBreakdown, SubScore};
pub use config::{RankingConfig, ScoringConfig, Weights};
pub use error::{ConfigError, Result};
pub use ranker::Ranker;
pub use result::{RankedEntry, RankedResult, ScoredCompany};
pub use scorer::Scorer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
