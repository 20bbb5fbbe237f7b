//! Earnings per Share
//!
//! Passes trailing EPS through unchanged. Negative EPS is a true value here,
//! unlike in the P/E multiple.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, require};
use fundamenta_data::RawFinancials;

/// Eps reports trailing earnings per share
#[derive(Debug, Default, Clone, Copy)]
pub struct EpsRatio;

impl Ratio for EpsRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::Eps
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["eps"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        require(data.eps(), "eps")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        let data = RawFinancials::builder("A").eps(-2.0).build();
        assert_eq!(EpsRatio.compute(&data), Ok(-2.0));
    }

    #[test]
    fn test_missing() {
        let data = RawFinancials::builder("A").build();
        assert_eq!(
            EpsRatio.compute(&data),
            Err(UndefinedRatio::Missing { field: "eps" })
        );
    }
}
