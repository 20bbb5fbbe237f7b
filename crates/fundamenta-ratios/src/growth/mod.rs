//! Growth ratios - measures of earnings power and top-line expansion
//!
//! Growth ratios capture how much a company earns per share and how fast its
//! revenue has compounded over recent fiscal years.

pub mod eps;
pub mod revenue_growth;

pub use eps::EpsRatio;
pub use revenue_growth::RevenueGrowthRatio;
