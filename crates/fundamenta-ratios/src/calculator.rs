//! Ratio calculation for one company.

use crate::growth::revenue_growth::RevenueGrowthConfig;
use crate::growth::{EpsRatio, RevenueGrowthRatio};
use crate::kind::RatioKind;
use crate::quality::{LeverageRatio, RoeRatio};
use crate::ratio_set::{DataQualityNote, RatioSet};
use crate::traits::{ConfigurableRatio, Ratio, UndefinedRatio};
use crate::value::dividend_yield::DividendYieldConfig;
use crate::value::{DividendYieldRatio, PriceBookRatio, PriceEarningsRatio, PriceSalesRatio};
use fundamenta_data::RawFinancials;
use tracing::debug;

/// Derives the full [`RatioSet`] for a company.
///
/// Runs every ratio in the fixed set:
/// - Value: P/E, P/S, P/B, dividend yield
/// - Growth: EPS, revenue growth
/// - Quality: ROE, debt ratio
///
/// Calculation is a pure function of the record. Undefined ratios are logged
/// at debug level and kept as notes on the result.
#[derive(Debug, Default)]
pub struct RatioCalculator {
    pe: PriceEarningsRatio,
    ps: PriceSalesRatio,
    pb: PriceBookRatio,
    dividend_yield: DividendYieldRatio,
    eps: EpsRatio,
    revenue_growth: RevenueGrowthRatio,
    roe: RoeRatio,
    leverage: LeverageRatio,
}

impl RatioCalculator {
    /// Create a calculator with default ratio configurations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom dividend and growth settings.
    pub fn with_configs(dividend: DividendYieldConfig, growth: RevenueGrowthConfig) -> Self {
        Self {
            dividend_yield: DividendYieldRatio::with_config(dividend),
            revenue_growth: RevenueGrowthRatio::with_config(growth),
            ..Self::default()
        }
    }

    /// All ratios the calculator runs, in reporting order.
    pub fn ratios(&self) -> [&dyn Ratio; 8] {
        [
            &self.pe,
            &self.ps,
            &self.pb,
            &self.dividend_yield,
            &self.eps,
            &self.revenue_growth,
            &self.roe,
            &self.leverage,
        ]
    }

    /// Compute every ratio for one company.
    pub fn compute(&self, data: &RawFinancials) -> RatioSet {
        let mut notes = Vec::new();
        let symbol = data.symbol.as_str();

        let pe_ratio = resolve(&self.pe, data, &mut notes);
        let ps_ratio = resolve(&self.ps, data, &mut notes);
        let pb_ratio = resolve(&self.pb, data, &mut notes);
        let dividend_yield = resolve(&self.dividend_yield, data, &mut notes);
        let eps = resolve(&self.eps, data, &mut notes);

        let revenue_growth = match self.revenue_growth.growth(data) {
            Ok(growth) => {
                if growth.partial {
                    debug!(
                        symbol,
                        fiscal_years = growth.fiscal_years,
                        span_years = growth.span_years,
                        "revenue growth measured over a partial span"
                    );
                    notes.push(DataQualityNote::PartialSpanGrowth {
                        fiscal_years: growth.fiscal_years,
                        span_years: growth.span_years,
                    });
                }
                Some(growth)
            }
            Err(reason) => {
                note_undefined(symbol, RatioKind::RevenueGrowth, reason, &mut notes);
                None
            }
        };

        let roe = resolve(&self.roe, data, &mut notes);
        let debt_ratio = resolve(&self.leverage, data, &mut notes);

        RatioSet {
            pe_ratio,
            ps_ratio,
            pb_ratio,
            dividend_yield,
            eps,
            revenue_growth,
            roe,
            debt_ratio,
            notes,
        }
    }
}

fn resolve(
    ratio: &dyn Ratio,
    data: &RawFinancials,
    notes: &mut Vec<DataQualityNote>,
) -> Option<f64> {
    match ratio.compute(data) {
        Ok(value) => Some(value),
        Err(reason) => {
            note_undefined(&data.symbol, ratio.kind(), reason, notes);
            None
        }
    }
}

fn note_undefined(
    symbol: &str,
    ratio: RatioKind,
    reason: UndefinedRatio,
    notes: &mut Vec<DataQualityNote>,
) {
    debug!(symbol, ratio = %ratio, reason = %reason, "ratio undefined");
    notes.push(DataQualityNote::UndefinedRatio { ratio, reason });
}
