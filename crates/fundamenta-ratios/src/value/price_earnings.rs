//! Price-to-Earnings Ratio
//!
//! Share price divided by trailing earnings per share. Negative or zero
//! earnings make the multiple meaningless rather than merely large, so the
//! ratio is undefined for loss-making companies.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, finite, require, require_positive};
use fundamenta_data::RawFinancials;

/// PriceEarnings computes price / trailing EPS
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceEarningsRatio;

impl Ratio for PriceEarningsRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::PriceEarnings
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["price", "eps"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        let price = require_positive(data.price(), "price")?;
        let eps = require(data.eps(), "eps")?;
        if eps <= 0.0 {
            return Err(UndefinedRatio::NonPositive { field: "eps" });
        }
        finite(price / eps)
    }
}
