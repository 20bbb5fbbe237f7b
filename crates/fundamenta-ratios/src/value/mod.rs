//! Value ratios - measures of relative cheapness
//!
//! Value ratios compare the share price with what the company earns, sells,
//! owns, and pays out. Lower multiples and higher yields indicate potentially
//! undervalued securities.

pub mod dividend_yield;
pub mod price_book;
pub mod price_earnings;
pub mod price_sales;

pub use dividend_yield::DividendYieldRatio;
pub use price_book::PriceBookRatio;
pub use price_earnings::PriceEarningsRatio;
pub use price_sales::PriceSalesRatio;
