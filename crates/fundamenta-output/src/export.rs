//! Export functionality for ranked screening results.
//!
//! The full ranked table is written as flat CSV rows (one per company) or as
//! JSON. [`save_results`] names the file after the run time so successive
//! runs never overwrite each other.

use chrono::{Local, NaiveDateTime};
use fundamenta_ratios::RatioKind;
use fundamenta_scoring::{RankedEntry, RankedResult};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Chart rendering error.
    #[error("Chart rendering error: {0}")]
    Chart(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values format.
    #[default]
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One ranked company flattened into a table row.
///
/// Undefined ratios are empty cells in CSV and `null` in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    /// 1-based rank.
    pub rank: usize,
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Sector.
    pub sector: String,
    /// Composite score.
    pub score: f64,
    /// Price / earnings.
    pub pe_ratio: Option<f64>,
    /// Price / sales.
    pub ps_ratio: Option<f64>,
    /// Price / book.
    pub pb_ratio: Option<f64>,
    /// Dividend yield (fraction).
    pub dividend_yield: Option<f64>,
    /// Earnings per share.
    pub eps: Option<f64>,
    /// Compound annual revenue growth (fraction).
    pub revenue_growth_5y: Option<f64>,
    /// Whether growth spans fewer years than the full window.
    pub revenue_growth_partial: bool,
    /// Return on equity (fraction).
    pub roe: Option<f64>,
    /// Debt / equity.
    pub debt_ratio: Option<f64>,
    /// Ratios scored neutrally, `;`-separated.
    pub neutral_ratios: String,
}

impl From<&RankedEntry> for RankingRow {
    fn from(entry: &RankedEntry) -> Self {
        let company = &entry.company;
        let ratios = &company.ratios;
        Self {
            rank: entry.rank,
            symbol: company.symbol.clone(),
            name: company.name.clone(),
            sector: company.sector.clone(),
            score: company.score.composite,
            pe_ratio: ratios.get(RatioKind::PriceEarnings),
            ps_ratio: ratios.get(RatioKind::PriceSales),
            pb_ratio: ratios.get(RatioKind::PriceBook),
            dividend_yield: ratios.get(RatioKind::DividendYield),
            eps: ratios.get(RatioKind::Eps),
            revenue_growth_5y: ratios.get(RatioKind::RevenueGrowth),
            revenue_growth_partial: ratios.has_partial_growth(),
            roe: ratios.get(RatioKind::ReturnOnEquity),
            debt_ratio: ratios.get(RatioKind::DebtRatio),
            neutral_ratios: company
                .score
                .neutral_ratios()
                .iter()
                .map(RatioKind::name)
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn rows_to_csv<'a>(rows: impl IntoIterator<Item = &'a RankingRow>) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

impl Exporter for Vec<RankingRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => rows_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for RankedResult {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let rows: Vec<RankingRow> = self.iter().map(RankingRow::from).collect();
                rows_to_csv(&rows)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// File name of the form `<prefix>_<YYYYmmdd_HHMMSS>.<ext>`.
pub fn timestamped_file_name(prefix: &str, extension: &str, at: NaiveDateTime) -> String {
    format!("{prefix}_{}.{extension}", at.format("%Y%m%d_%H%M%S"))
}

/// Write the full ranked table into `output_dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn save_results(
    result: &RankedResult,
    output_dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir)?;
    let name = timestamped_file_name(
        "ranking",
        format.extension(),
        Local::now().naive_local(),
    );
    let path = output_dir.join(name);
    result.export_to_file(&path, format)?;
    info!(path = %path.display(), rows = result.len(), "ranking saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fundamenta_ratios::RatioSet;
    use fundamenta_scoring::{Ranker, ScoredCompany, Scorer, ScoringConfig};
    use rstest::rstest;

    fn sample_result() -> RankedResult {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let make = |symbol: &str, ratios: RatioSet| ScoredCompany {
            symbol: symbol.to_string(),
            name: format!("{symbol} Inc."),
            sector: "Technology".to_string(),
            score: scorer.score(&ratios),
            ratios,
        };
        Ranker::default().rank(vec![
            make(
                "AAPL",
                RatioSet::empty()
                    .with(RatioKind::PriceEarnings, 25.6)
                    .with(RatioKind::DividendYield, 0.0085),
            ),
            make("MSFT", RatioSet::empty().with(RatioKind::PriceEarnings, 9.0)),
        ])
    }

    #[test]
    fn test_ranking_export_csv() {
        let csv = sample_result().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("rank,symbol,name,sector,score,pe_ratio"));
        assert!(header.contains("neutral_ratios"));

        let first = lines.next().unwrap();
        assert!(first.starts_with("1,MSFT,MSFT Inc.,Technology,"));
        // Undefined ratios are empty cells.
        assert!(first.contains(",9.0,,"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_ranking_export_json() {
        let json = sample_result().export_to_string(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["symbol"], "MSFT");
        assert_eq!(entries[0]["rank"], 1);
        assert!(entries[1]["ratios"]["ps_ratio"].is_null());
    }

    #[test]
    fn test_rows_roundtrip_through_csv() {
        let rows: Vec<RankingRow> = sample_result().iter().map(RankingRow::from).collect();
        let csv = rows.export_to_string(ExportFormat::Csv).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let parsed: Vec<RankingRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, rows);
    }

    #[rstest]
    #[case("CSV", ExportFormat::Csv, "csv")]
    #[case("json", ExportFormat::Json, "json")]
    #[case("pretty-json", ExportFormat::PrettyJson, "json")]
    #[case("Pretty_Json", ExportFormat::PrettyJson, "json")]
    fn test_export_format_from_str(
        #[case] name: &str,
        #[case] expected: ExportFormat,
        #[case] extension: &str,
    ) {
        let format = name.parse::<ExportFormat>().unwrap();
        assert_eq!(format, expected);
        assert_eq!(format.extension(), extension);
    }

    #[test]
    fn test_export_format_rejects_unknown() {
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[rstest]
    #[case::csv(ExportFormat::Csv)]
    #[case::json(ExportFormat::Json)]
    #[case::pretty_json(ExportFormat::PrettyJson)]
    fn test_export_lists_companies_in_rank_order(#[case] format: ExportFormat) {
        let text = sample_result().export_to_string(format).unwrap();
        let msft = text.find("MSFT").unwrap();
        let aapl = text.find("AAPL").unwrap();
        assert!(msft < aapl);
    }

    #[test]
    fn test_timestamped_file_name() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(
            timestamped_file_name("ranking", "csv", at),
            "ranking_20240309_140507.csv"
        );
    }

    #[test]
    fn test_save_results_creates_directory() {
        let dir = std::env::temp_dir().join("fundamenta_export_test");
        std::fs::remove_dir_all(&dir).ok();

        let path = save_results(&sample_result(), &dir, ExportFormat::Csv).unwrap();
        assert!(path.starts_with(&dir));
        assert_eq!(path.extension().unwrap(), "csv");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("AAPL"));

        std::fs::remove_dir_all(dir).ok();
    }
}
