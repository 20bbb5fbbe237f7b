//! Threshold bands
//!
//! A ratio is scored by counting how many of `n` increasing boundaries it
//! satisfies:
//!
//! ```text
//! lower is better:  10 * |{b : value <= b}| / n
//! higher is better: 10 * |{b : value >= b}| / n
//! ```
//!
//! A value past the last boundary therefore saturates at the maximum score.

use crate::error::{ConfigError, Result};
use fundamenta_ratios::{Direction, RatioKind};
use serde::{Deserialize, Serialize};

/// Lowest possible sub-score or composite
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible sub-score or composite
pub const MAX_SCORE: f64 = 10.0;

/// Sub-score given to an undefined ratio unless configured otherwise
pub const DEFAULT_NEUTRAL_SCORE: f64 = 5.0;

/// Strictly increasing band boundaries for one ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bands(Vec<f64>);

impl Bands {
    /// Create bands from boundaries. Call [`validate`](Self::validate) before
    /// scoring with them.
    pub const fn new(boundaries: Vec<f64>) -> Self {
        Self(boundaries)
    }

    /// The boundaries.
    pub fn boundaries(&self) -> &[f64] {
        &self.0
    }

    /// Number of boundaries.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no boundaries are configured.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the boundaries are non-empty, finite and strictly increasing.
    pub fn validate(&self, ratio: RatioKind) -> Result<()> {
        if self.0.is_empty() {
            return Err(ConfigError::EmptyBands(ratio));
        }
        if let Some(&value) = self.0.iter().find(|b| !b.is_finite()) {
            return Err(ConfigError::NonFiniteBand { ratio, value });
        }
        if let Some(pair) = self.0.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ConfigError::UnorderedBands {
                ratio,
                previous: pair[0],
                next: pair[1],
            });
        }
        Ok(())
    }

    /// Score a defined, finite value in `[MIN_SCORE, MAX_SCORE]`.
    pub fn sub_score(&self, value: f64, direction: Direction) -> f64 {
        if self.0.is_empty() {
            return MIN_SCORE;
        }
        let satisfied = match direction {
            Direction::LowerIsBetter => self.0.iter().filter(|&&b| value <= b).count(),
            Direction::HigherIsBetter => self.0.iter().filter(|&&b| value >= b).count(),
        };
        let score = MAX_SCORE * satisfied as f64 / self.0.len() as f64;
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

impl From<Vec<f64>> for Bands {
    fn from(boundaries: Vec<f64>) -> Self {
        Self(boundaries)
    }
}

/// Band lists for all eight ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandSet {
    /// P/E bands (lower is better)
    pub pe_ratio: Bands,
    /// P/S bands (lower is better)
    pub ps_ratio: Bands,
    /// P/B bands (lower is better)
    pub pb_ratio: Bands,
    /// Dividend yield bands (higher is better)
    pub dividend_yield: Bands,
    /// EPS bands (higher is better)
    pub eps: Bands,
    /// Revenue growth bands (higher is better)
    #[serde(rename = "revenue_growth_5y")]
    pub revenue_growth: Bands,
    /// ROE bands (higher is better)
    pub roe: Bands,
    /// Debt ratio bands (lower is better)
    pub debt_ratio: Bands,
}

impl Default for BandSet {
    fn default() -> Self {
        Self {
            pe_ratio: Bands::new(vec![10.0, 15.0, 20.0, 25.0, 30.0]),
            ps_ratio: Bands::new(vec![1.0, 2.0, 4.0, 6.0, 10.0]),
            pb_ratio: Bands::new(vec![1.0, 2.0, 3.0, 5.0, 8.0]),
            dividend_yield: Bands::new(vec![0.01, 0.02, 0.03, 0.04, 0.05]),
            eps: Bands::new(vec![0.01, 1.0, 2.0, 4.0, 8.0]),
            revenue_growth: Bands::new(vec![0.0, 0.03, 0.05, 0.10, 0.15]),
            roe: Bands::new(vec![0.05, 0.10, 0.15, 0.20, 0.25]),
            debt_ratio: Bands::new(vec![0.25, 0.5, 1.0, 1.5, 2.0]),
        }
    }
}

impl BandSet {
    /// Bands for one ratio.
    pub const fn get(&self, kind: RatioKind) -> &Bands {
        match kind {
            RatioKind::PriceEarnings => &self.pe_ratio,
            RatioKind::PriceSales => &self.ps_ratio,
            RatioKind::PriceBook => &self.pb_ratio,
            RatioKind::DividendYield => &self.dividend_yield,
            RatioKind::Eps => &self.eps,
            RatioKind::RevenueGrowth => &self.revenue_growth,
            RatioKind::ReturnOnEquity => &self.roe,
            RatioKind::DebtRatio => &self.debt_ratio,
        }
    }

    /// Validate every ratio's bands.
    pub fn validate(&self) -> Result<()> {
        RatioKind::ALL
            .into_iter()
            .try_for_each(|kind| self.get(kind).validate(kind))
    }
}
