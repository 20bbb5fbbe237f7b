//! The `Ratio` trait and the reasons a ratio can be undefined.

use crate::kind::RatioKind;
use fundamenta_data::RawFinancials;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a ratio could not be computed for a company.
///
/// This is a data-quality outcome, not a failure: the ratio is reported as
/// undefined and scored neutrally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UndefinedRatio {
    /// A required input was absent or non-finite
    #[error("missing {field}")]
    Missing {
        /// Input field name
        field: &'static str,
    },

    /// A denominator or base value was zero or negative
    #[error("{field} is not positive")]
    NonPositive {
        /// Input field name
        field: &'static str,
    },

    /// An input that cannot be negative was negative
    #[error("{field} is negative")]
    Negative {
        /// Input field name
        field: &'static str,
    },

    /// Not enough fiscal years of revenue to measure growth
    #[error("insufficient revenue history ({points} fiscal year(s), need at least 2)")]
    InsufficientHistory {
        /// Usable fiscal years on record
        points: usize,
    },

    /// The arithmetic overflowed
    #[error("result is not finite")]
    NonFinite,
}

/// A single fundamental ratio derived from one company's raw data.
///
/// Implementations are pure: the same record always yields the same result,
/// and bad input yields an [`UndefinedRatio`] instead of a panic.
pub trait Ratio: fmt::Debug + Send + Sync {
    /// Which ratio this is.
    fn kind(&self) -> RatioKind;

    /// Stable ratio name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Raw input fields the ratio reads.
    fn required_fields(&self) -> &'static [&'static str];

    /// Compute the ratio for one company.
    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio>;
}

/// A ratio whose calculation can be tuned.
pub trait ConfigurableRatio: Ratio + Sized {
    /// Configuration type.
    type Config: Clone + Default;

    /// Create the ratio with a custom configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Current configuration.
    fn config(&self) -> &Self::Config;
}

/// Require a present, finite input.
pub(crate) fn require(value: Option<f64>, field: &'static str) -> Result<f64, UndefinedRatio> {
    value.ok_or(UndefinedRatio::Missing { field })
}

/// Require a present input that is strictly positive.
pub(crate) fn require_positive(
    value: Option<f64>,
    field: &'static str,
) -> Result<f64, UndefinedRatio> {
    let value = require(value, field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(UndefinedRatio::NonPositive { field })
    }
}

/// Reject non-finite arithmetic results.
pub(crate) fn finite(value: f64) -> Result<f64, UndefinedRatio> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UndefinedRatio::NonFinite)
    }
}
