//! Return on Equity (ROE)
//!
//! Measures profitability relative to shareholder equity. Higher ROE indicates
//! more efficient use of equity capital and better fundamental quality.

use crate::kind::RatioKind;
use crate::traits::{Ratio, UndefinedRatio, finite, require, require_positive};
use fundamenta_data::RawFinancials;

/// Roe computes return on equity as net income divided by shareholder equity
#[derive(Debug, Default, Clone, Copy)]
pub struct RoeRatio;

impl Ratio for RoeRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::ReturnOnEquity
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["net_income", "shareholder_equity"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        // Negative equity flips the sign of the ratio, so it is not comparable.
        let equity = require_positive(data.shareholder_equity(), "shareholder_equity")?;
        let net_income = require(data.net_income(), "net_income")?;
        finite(net_income / equity)
    }
}
