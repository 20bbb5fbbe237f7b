//! Price-to-Book Ratio
//!
//! Share price divided by book value per share. A company with zero or
//! negative book value has no meaningful multiple.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, finite, require_positive};
use fundamenta_data::RawFinancials;

/// PriceBook computes price / book value per share
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceBookRatio;

impl Ratio for PriceBookRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::PriceBook
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["price", "book_value_per_share"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        let price = require_positive(data.price(), "price")?;
        let book = require_positive(data.book_value_per_share(), "book_value_per_share")?;
        finite(price / book)
    }
}
