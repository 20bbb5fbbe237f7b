//! Dividend Yield
//!
//! Annual dividend per share divided by share price. A company that pays no
//! dividend has a true yield of zero; only a missing or non-positive price
//! makes the yield undefined.

use crate::kind::RatioKind;
use crate::traits::{ConfigurableRatio, Ratio, UndefinedRatio, finite, require_positive};
use fundamenta_data::RawFinancials;
use serde::{Deserialize, Serialize};

/// Configuration for the DividendYield ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividendYieldConfig {
    /// Read a missing dividend as "no dividend paid" (default: true)
    pub missing_as_zero: bool,
}

impl Default for DividendYieldConfig {
    fn default() -> Self {
        Self {
            missing_as_zero: true,
        }
    }
}

/// DividendYield computes dividend per share / price
#[derive(Debug, Default)]
pub struct DividendYieldRatio {
    config: DividendYieldConfig,
}

impl Ratio for DividendYieldRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::DividendYield
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["price", "dividend_per_share"]
    }

    fn compute(&self, data: &RawFinancials) -> Result<f64, UndefinedRatio> {
        let price = require_positive(data.price(), "price")?;
        let dividend = match data.dividend_per_share() {
            Some(d) if d < 0.0 => {
                return Err(UndefinedRatio::Negative {
                    field: "dividend_per_share",
                });
            }
            Some(d) => d,
            None if self.config.missing_as_zero => 0.0,
            None => {
                return Err(UndefinedRatio::Missing {
                    field: "dividend_per_share",
                });
            }
        };
        finite(dividend / price)
    }
}

impl ConfigurableRatio for DividendYieldRatio {
    type Config = DividendYieldConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
