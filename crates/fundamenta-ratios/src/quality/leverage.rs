//! Leverage (Debt Ratio)
//!
//! Measures financial leverage as total debt over total equity. Lower
//! leverage typically indicates higher quality and financial stability.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, finite, require, require_positive};
use fundamenta_data::RawFinancials;

/// Leverage computes financial leverage as debt-to-equity ratio
#[derive(Debug, Default, Clone, Copy)]
pub struct LeverageRatio;

impl Ratio for LeverageRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::DebtRatio
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["total_debt", "total_equity"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        let equity = require_positive(data.total_equity(), "total_equity")?;
        let debt = require(data.total_debt(), "total_debt")?;
        if debt < 0.0 {
            return Err(UndefinedRatio::Negative { field: "total_debt" });
        }
        finite(debt / equity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_debt_ratio() {
        let data = RawFinancials::builder("A")
            .total_debt(300.0)
            .total_equity(1_000.0)
            .build();
        assert_relative_eq!(LeverageRatio.compute(&data).unwrap(), 0.3);
    }

    #[test]
    fn test_debt_free_company() {
        let data = RawFinancials::builder("A")
            .total_debt(0.0)
            .total_equity(1_000.0)
            .build();
        assert_eq!(LeverageRatio.compute(&data), Ok(0.0));
    }

    #[test]
    fn test_zero_equity_is_undefined() {
        let data = RawFinancials::builder("A")
            .total_debt(300.0)
            .total_equity(0.0)
            .build();
        assert_eq!(
            LeverageRatio.compute(&data),
            Err(UndefinedRatio::NonPositive {
                field: "total_equity"
            })
        );
    }

    #[test]
    fn test_negative_debt_is_undefined() {
        let data = RawFinancials::builder("A")
            .total_debt(-1.0)
            .total_equity(10.0)
            .build();
        assert!(LeverageRatio.compute(&data).is_err());
    }
}
