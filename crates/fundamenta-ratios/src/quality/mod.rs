//! Quality ratios - measures of fundamental business quality
//!
//! Quality ratios capture how profitably a business uses its equity and how
//! much leverage it carries. High ROE and low debt indicate a stable,
//! well-financed company.

pub mod leverage;
pub mod roe;

pub use leverage::LeverageRatio;
pub use roe::RoeRatio;
