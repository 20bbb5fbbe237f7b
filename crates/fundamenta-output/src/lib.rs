#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamenta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alert;
pub mod attribution;
pub mod chart;
pub mod export;
pub mod report;
pub mod summary;
pub mod table;

pub use alert::{AlertLine, AlertMessage, Notifier, WriterNotifier, notify_eligible};
pub use attribution::{RatioAttribution, ScoreAttribution};
pub use chart::{ChartOptions, render_svg, render_text, write_svg};
pub use export::{
    ExportError, ExportFormat, Exporter, RankingRow, save_results, timestamped_file_name,
};
pub use report::{ReportBuilder, ReportError, RunReport};
pub use summary::ScreeningSummary;
pub use table::RankingTable;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
