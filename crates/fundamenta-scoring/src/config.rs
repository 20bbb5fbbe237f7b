//! Scoring and ranking configuration.

use crate::bands::{BandSet, DEFAULT_NEUTRAL_SCORE, MAX_SCORE, MIN_SCORE};
use crate::error::{ConfigError, Result};
use fundamenta_ratios::RatioKind;
use serde::{Deserialize, Serialize};

/// Per-ratio weights of the composite score.
///
/// Weights need not sum to one; the scorer normalises them before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// P/E weight
    pub pe_ratio: f64,
    /// P/S weight
    pub ps_ratio: f64,
    /// P/B weight
    pub pb_ratio: f64,
    /// Dividend yield weight
    pub dividend_yield: f64,
    /// EPS weight
    pub eps: f64,
    /// Revenue growth weight
    #[serde(rename = "revenue_growth_5y")]
    pub revenue_growth: f64,
    /// ROE weight
    pub roe: f64,
    /// Debt ratio weight
    pub debt_ratio: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            pe_ratio: 0.20,
            ps_ratio: 0.10,
            pb_ratio: 0.10,
            dividend_yield: 0.15,
            eps: 0.05,
            revenue_growth: 0.20,
            roe: 0.10,
            debt_ratio: 0.10,
        }
    }
}

impl Weights {
    /// Weight of one ratio.
    pub const fn get(&self, kind: RatioKind) -> f64 {
        match kind {
            RatioKind::PriceEarnings => self.pe_ratio,
            RatioKind::PriceSales => self.ps_ratio,
            RatioKind::PriceBook => self.pb_ratio,
            RatioKind::DividendYield => self.dividend_yield,
            RatioKind::Eps => self.eps,
            RatioKind::RevenueGrowth => self.revenue_growth,
            RatioKind::ReturnOnEquity => self.roe,
            RatioKind::DebtRatio => self.debt_ratio,
        }
    }

    /// Weights in [`RatioKind::ALL`] order.
    pub const fn as_array(&self) -> [f64; 8] {
        [
            self.pe_ratio,
            self.ps_ratio,
            self.pb_ratio,
            self.dividend_yield,
            self.eps,
            self.revenue_growth,
            self.roe,
            self.debt_ratio,
        ]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Check every weight is finite and non-negative with a positive sum.
    pub fn validate(&self) -> Result<()> {
        for kind in RatioKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { ratio: kind, value });
            }
        }
        if self.sum() <= 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(())
    }

    /// Weights rescaled to sum to one.
    pub fn normalised(&self) -> Result<Self> {
        self.validate()?;
        let sum = self.sum();
        Ok(Self {
            pe_ratio: self.pe_ratio / sum,
            ps_ratio: self.ps_ratio / sum,
            pb_ratio: self.pb_ratio / sum,
            dividend_yield: self.dividend_yield / sum,
            eps: self.eps / sum,
            revenue_growth: self.revenue_growth / sum,
            roe: self.roe / sum,
            debt_ratio: self.debt_ratio / sum,
        })
    }

    /// Whether the weights sum to one.
    pub fn is_normalised(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }
}

/// Everything the scorer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Composite weights
    pub weights: Weights,
    /// Threshold bands per ratio
    pub bands: BandSet,
    /// Sub-score for an undefined ratio
    pub neutral_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            bands: BandSet::default(),
            neutral_score: DEFAULT_NEUTRAL_SCORE,
        }
    }
}

impl ScoringConfig {
    /// Validate weights, bands, and the neutral score.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.bands.validate()?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.neutral_score) {
            return Err(ConfigError::InvalidNeutralScore(self.neutral_score));
        }
        Ok(())
    }
}

/// Selection parameters applied to a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Size of the top slice
    pub top_n: usize,
    /// Composite score a company needs to be eligible for alerts
    pub min_score: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            min_score: 7.0,
        }
    }
}

impl RankingConfig {
    /// Set the top slice size.
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the eligibility threshold.
    pub const fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Check top-N is at least one and the threshold is finite.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidTopN);
        }
        if !self.min_score.is_finite() {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}
