//! Price-to-Sales Ratio
//!
//! Market capitalisation divided by the latest fiscal year's revenue. Market
//! cap is taken as reported, or derived as price times shares outstanding.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, finite, require_positive};
use fundamenta_data::RawFinancials;

/// PriceSales computes market cap / trailing revenue
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceSalesRatio;

impl Ratio for PriceSalesRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::PriceSales
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["market_cap|price+shares_outstanding", "revenue_history"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        let revenue = require_positive(data.latest_revenue(), "revenue")?;
        let market_cap = require_positive(data.market_cap(), "market_cap")?;
        finite(market_cap / revenue)
    }
}
