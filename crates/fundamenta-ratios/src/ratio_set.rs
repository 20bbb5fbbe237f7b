//! The per-company set of derived ratios.

use crate::kind::RatioKind;
use crate::traits::UndefinedRatio;
use serde::Serialize;
use std::fmt;

/// Compound annual revenue growth with the span it was measured over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueGrowth {
    /// Compound annual growth rate as a fraction (0.10 = 10% per year)
    pub rate: f64,
    /// Fiscal years of revenue used
    pub fiscal_years: usize,
    /// Years between the earliest and latest figure
    pub span_years: u32,
    /// Whether the figures span fewer years than the full lookback
    pub partial: bool,
}

impl RevenueGrowth {
    /// Growth measured over a full five-year window.
    pub const fn full_span(rate: f64) -> Self {
        Self {
            rate,
            fiscal_years: 5,
            span_years: 4,
            partial: false,
        }
    }
}

/// A data-quality observation made while deriving a company's ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "note", rename_all = "snake_case")]
pub enum DataQualityNote {
    /// A ratio could not be computed
    UndefinedRatio {
        /// Which ratio
        ratio: RatioKind,
        /// Why it is undefined
        #[serde(flatten)]
        reason: UndefinedRatio,
    },
    /// Revenue growth was measured over fewer years than the full window
    PartialSpanGrowth {
        /// Fiscal years of revenue used
        fiscal_years: usize,
        /// Years between the earliest and latest figure
        span_years: u32,
    },
}

impl fmt::Display for DataQualityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedRatio { ratio, reason } => write!(f, "{ratio} undefined: {reason}"),
            Self::PartialSpanGrowth {
                fiscal_years,
                span_years,
            } => write!(
                f,
                "revenue growth over {span_years} year(s) from {fiscal_years} fiscal year(s)"
            ),
        }
    }
}

/// Derived ratios for one company.
///
/// An undefined ratio is `None`; it is never NaN and never a silent zero.
/// A `RatioSet` is produced once per company per run and not modified
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatioSet {
    /// Price / earnings
    pub pe_ratio: Option<f64>,
    /// Price / sales
    pub ps_ratio: Option<f64>,
    /// Price / book
    pub pb_ratio: Option<f64>,
    /// Dividend yield as a fraction
    pub dividend_yield: Option<f64>,
    /// Trailing earnings per share
    pub eps: Option<f64>,
    /// Compound annual revenue growth
    pub revenue_growth: Option<RevenueGrowth>,
    /// Return on equity as a fraction
    pub roe: Option<f64>,
    /// Total debt / total equity
    pub debt_ratio: Option<f64>,
    /// Data-quality notes collected while computing the set
    pub notes: Vec<DataQualityNote>,
}

impl RatioSet {
    /// A set with every ratio undefined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a copy with `kind` set to `value`.
    ///
    /// Revenue growth set this way is treated as measured over a full window.
    pub fn with(mut self, kind: RatioKind, value: f64) -> Self {
        let value = Some(value).filter(|v| v.is_finite());
        match kind {
            RatioKind::PriceEarnings => self.pe_ratio = value,
            RatioKind::PriceSales => self.ps_ratio = value,
            RatioKind::PriceBook => self.pb_ratio = value,
            RatioKind::DividendYield => self.dividend_yield = value,
            RatioKind::Eps => self.eps = value,
            RatioKind::RevenueGrowth => self.revenue_growth = value.map(RevenueGrowth::full_span),
            RatioKind::ReturnOnEquity => self.roe = value,
            RatioKind::DebtRatio => self.debt_ratio = value,
        }
        self
    }

    /// Value of one ratio, `None` when undefined.
    pub fn get(&self, kind: RatioKind) -> Option<f64> {
        match kind {
            RatioKind::PriceEarnings => self.pe_ratio,
            RatioKind::PriceSales => self.ps_ratio,
            RatioKind::PriceBook => self.pb_ratio,
            RatioKind::DividendYield => self.dividend_yield,
            RatioKind::Eps => self.eps,
            RatioKind::RevenueGrowth => self.revenue_growth.map(|g| g.rate),
            RatioKind::ReturnOnEquity => self.roe,
            RatioKind::DebtRatio => self.debt_ratio,
        }
    }

    /// Ratios that could not be computed.
    pub fn undefined(&self) -> Vec<RatioKind> {
        RatioKind::ALL
            .into_iter()
            .filter(|k| self.get(*k).is_none())
            .collect()
    }

    /// Number of defined ratios.
    pub fn defined_count(&self) -> usize {
        RatioKind::ALL.len() - self.undefined().len()
    }

    /// Whether revenue growth was measured over a partial span.
    pub fn has_partial_growth(&self) -> bool {
        self.revenue_growth.is_some_and(|g| g.partial)
    }
}
