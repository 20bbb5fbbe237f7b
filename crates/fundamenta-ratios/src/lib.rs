#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamenta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod growth;
pub mod kind;
pub mod quality;
pub mod ratio_set;
pub mod registry;
pub mod traits;
pub mod value;

pub use calculator::RatioCalculator;
pub use kind::{Direction, RatioKind};
pub use ratio_set::{DataQualityNote, RatioSet, RevenueGrowth};
pub use traits::{ConfigurableRatio, Ratio, UndefinedRatio};

// Re-export registry types for convenience
pub use registry::{
    RatioCategory, RatioInfo, available_ratios, count_by_category, get_ratio_info,
    list_ratio_names, ratio_map, ratios_by_category,
};
