//! Revenue Growth
//!
//! Compound annual growth rate between the earliest and latest annual revenue
//! figures inside the lookback window:
//!
//! ```text
//! (latest / earliest) ^ (1 / span_years) - 1
//! ```
//!
//! where `span_years` is the fiscal-year distance between the two figures.
//! The window covers the `lookback_years` calendar years ending at the latest
//! fiscal year. When the two figures span fewer than `lookback_years - 1`
//! years the rate is still produced but tagged as a partial span.

use crate::kind::RatioKind;
use crate::ratio_set::RevenueGrowth;
use crate::traits::{ConfigurableRatio, Ratio, UndefinedRatio, finite};
use fundamenta_data::RawFinancials;
use serde::{Deserialize, Serialize};

/// Configuration for the RevenueGrowth ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueGrowthConfig {
    /// Calendar years covered by a full window (default: 5)
    pub lookback_years: usize,
}

impl Default for RevenueGrowthConfig {
    fn default() -> Self {
        Self { lookback_years: 5 }
    }
}

/// RevenueGrowth computes compound annual revenue growth
#[derive(Debug, Default)]
pub struct RevenueGrowthRatio {
    config: RevenueGrowthConfig,
}

impl RevenueGrowthRatio {
    /// Compute the growth rate together with its span and partial tag.
    pub fn growth(&self, data: &RawFinancials) -> Result<RevenueGrowth, UndefinedRatio> {
        let lookback = self.config.lookback_years.max(2);
        let window = data.revenue_window(lookback);

        let (earliest, latest) = match (window.first(), window.last()) {
            (Some(first), Some(last)) if window.len() >= 2 => (*first, *last),
            _ => {
                return Err(UndefinedRatio::InsufficientHistory {
                    points: window.len(),
                });
            }
        };

        if earliest.revenue <= 0.0 {
            return Err(UndefinedRatio::NonPositive {
                field: "earliest revenue",
            });
        }
        if latest.revenue < 0.0 {
            return Err(UndefinedRatio::Negative {
                field: "latest revenue",
            });
        }

        // Years in the window are distinct and sorted, so the span is positive.
        let span_years = latest.fiscal_year.abs_diff(earliest.fiscal_year);
        let full_span = u32::try_from(lookback - 1).unwrap_or(u32::MAX);
        let multiple = latest.revenue / earliest.revenue;
        let rate = finite(multiple.powf(1.0 / f64::from(span_years)) - 1.0)?;

        Ok(RevenueGrowth {
            rate,
            fiscal_years: window.len(),
            span_years,
            partial: span_years < full_span,
        })
    }
}

impl Ratio for RevenueGrowthRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::RevenueGrowth
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["revenue_history"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        self.growth(data).map(|g| g.rate)
    }
}

impl ConfigurableRatio for RevenueGrowthRatio {
    type Config = RevenueGrowthConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
