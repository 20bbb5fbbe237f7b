//! Identifiers for the fixed set of ratios.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which way a ratio moves as a company becomes more attractive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Cheaper or less leveraged is better (PE, PS, PB, debt ratio)
    #[display("lower is better")]
    LowerIsBetter,
    /// More is better (dividend yield, EPS, revenue growth, ROE)
    #[display("higher is better")]
    HigherIsBetter,
}

/// One of the eight ratios derived for every company.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
pub enum RatioKind {
    /// Price / trailing EPS
    #[display("pe_ratio")]
    #[serde(rename = "pe_ratio")]
    PriceEarnings,
    /// Market cap / trailing revenue
    #[display("ps_ratio")]
    #[serde(rename = "ps_ratio")]
    PriceSales,
    /// Price / book value per share
    #[display("pb_ratio")]
    #[serde(rename = "pb_ratio")]
    PriceBook,
    /// Dividend per share / price
    #[display("dividend_yield")]
    #[serde(rename = "dividend_yield")]
    DividendYield,
    /// Trailing earnings per share
    #[display("eps")]
    #[serde(rename = "eps")]
    Eps,
    /// Compound annual revenue growth over up to five fiscal years
    #[display("revenue_growth_5y")]
    #[serde(rename = "revenue_growth_5y")]
    RevenueGrowth,
    /// Net income / shareholder equity
    #[display("roe")]
    #[serde(rename = "roe")]
    ReturnOnEquity,
    /// Total debt / total equity
    #[display("debt_ratio")]
    #[serde(rename = "debt_ratio")]
    DebtRatio,
}

impl RatioKind {
    /// All ratios, in reporting order.
    pub const ALL: [Self; 8] = [
        Self::PriceEarnings,
        Self::PriceSales,
        Self::PriceBook,
        Self::DividendYield,
        Self::Eps,
        Self::RevenueGrowth,
        Self::ReturnOnEquity,
        Self::DebtRatio,
    ];

    /// Stable snake_case name, used as column name in exports.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PriceEarnings => "pe_ratio",
            Self::PriceSales => "ps_ratio",
            Self::PriceBook => "pb_ratio",
            Self::DividendYield => "dividend_yield",
            Self::Eps => "eps",
            Self::RevenueGrowth => "revenue_growth_5y",
            Self::ReturnOnEquity => "roe",
            Self::DebtRatio => "debt_ratio",
        }
    }

    /// Short label for tables.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PriceEarnings => "P/E",
            Self::PriceSales => "P/S",
            Self::PriceBook => "P/B",
            Self::DividendYield => "Dividend Yield",
            Self::Eps => "EPS",
            Self::RevenueGrowth => "Revenue Growth",
            Self::ReturnOnEquity => "ROE",
            Self::DebtRatio => "Debt Ratio",
        }
    }

    /// Scoring direction of the ratio.
    pub const fn direction(&self) -> Direction {
        match self {
            Self::PriceEarnings | Self::PriceSales | Self::PriceBook | Self::DebtRatio => {
                Direction::LowerIsBetter
            }
            Self::DividendYield | Self::Eps | Self::RevenueGrowth | Self::ReturnOnEquity => {
                Direction::HigherIsBetter
            }
        }
    }

    /// Whether the ratio is a fraction best shown as a percentage.
    pub const fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::DividendYield | Self::RevenueGrowth | Self::ReturnOnEquity
        )
    }

    /// Look a ratio up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_name() {
        for kind in RatioKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
            assert_eq!(RatioKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(RatioKind::from_name("beta"), None);
    }

    #[test]
    fn test_directions() {
        let lower: Vec<RatioKind> = RatioKind::ALL
            .into_iter()
            .filter(|k| k.direction() == Direction::LowerIsBetter)
            .collect();
        assert_eq!(
            lower,
            vec![
                RatioKind::PriceEarnings,
                RatioKind::PriceSales,
                RatioKind::PriceBook,
                RatioKind::DebtRatio
            ]
        );
    }
}
