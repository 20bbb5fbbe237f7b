//! Configuration errors.

use fundamenta_ratios::RatioKind;
use thiserror::Error;

/// A scoring or ranking configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A weight was negative or not finite
    #[error("Invalid weight for {ratio}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// Ratio the weight belongs to
        ratio: RatioKind,
        /// Offending value
        value: f64,
    },

    /// All weights were zero
    #[error("Weights sum to zero")]
    ZeroWeights,

    /// A band list was empty
    #[error("No bands configured for {0}")]
    EmptyBands(RatioKind),

    /// A band boundary was not finite
    #[error("Band boundary for {ratio} is not finite: {value}")]
    NonFiniteBand {
        /// Ratio the bands belong to
        ratio: RatioKind,
        /// Offending value
        value: f64,
    },

    /// Band boundaries were not strictly increasing
    #[error("Bands for {ratio} must be strictly increasing ({previous} then {next})")]
    UnorderedBands {
        /// Ratio the bands belong to
        ratio: RatioKind,
        /// Earlier boundary
        previous: f64,
        /// Following boundary
        next: f64,
    },

    /// Neutral score outside the score range
    #[error("Neutral score {0} is outside [0, 10]")]
    InvalidNeutralScore(f64),

    /// Top-N of zero
    #[error("Top-N must be at least 1")]
    InvalidTopN,

    /// Minimum score not finite
    #[error("Minimum score must be finite, got {0}")]
    InvalidMinScore(f64),
}

/// Result type for configuration validation
pub type Result<T> = std::result::Result<T, ConfigError>;
