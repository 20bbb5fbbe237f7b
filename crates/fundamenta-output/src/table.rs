//! Ranking tables for the terminal and for documentation.

use crate::export::RankingRow;
use fundamenta_scoring::RankedEntry;
use std::fmt;

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn pct_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

/// A slice of a ranking laid out as a table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingTable {
    /// Table title
    pub title: String,
    /// Rows in rank order
    pub rows: Vec<RankingRow>,
}

impl RankingTable {
    /// Build a table from ranked entries.
    pub fn new(title: impl Into<String>, entries: &[RankedEntry]) -> Self {
        Self {
            title: title.into(),
            rows: entries.iter().map(RankingRow::from).collect(),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.title));
        output.push_str(&"=".repeat(112));
        output.push('\n');
        output.push_str(&format!(
            "{:>4} {:<8} {:<24} {:<20} {:>8} {:>8} {:>9} {:>9} {:>8} {:>6}\n",
            "Rank", "Symbol", "Name", "Sector", "P/E", "Div", "Growth", "D/E", "ROE", "Score"
        ));
        output.push_str(&"-".repeat(112));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("(no companies ranked)\n");
        }
        for row in &self.rows {
            let growth = pct_cell(row.revenue_growth_5y);
            let growth = if row.revenue_growth_partial {
                format!("{growth}*")
            } else {
                growth
            };
            output.push_str(&format!(
                "{:>4} {:<8} {:<24} {:<20} {:>8} {:>8} {:>9} {:>9} {:>8} {:>6.2}\n",
                row.rank,
                truncate(&row.symbol, 8),
                truncate(&row.name, 24),
                truncate(&row.sector, 20),
                cell(row.pe_ratio),
                pct_cell(row.dividend_yield),
                growth,
                cell(row.debt_ratio),
                pct_cell(row.roe),
                row.score
            ));
        }

        output.push_str(&"=".repeat(112));
        output.push('\n');
        if self.rows.iter().any(|r| r.revenue_growth_partial) {
            output.push_str("* growth spans fewer years than the full window\n");
        }

        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str("| Rank | Symbol | Name | Sector | P/E | Div | Growth | D/E | ROE | Score |\n");
        output.push_str("|------|--------|------|--------|-----|-----|--------|-----|-----|-------|\n");

        for row in &self.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {:.2} |\n",
                row.rank,
                row.symbol,
                row.name,
                row.sector,
                cell(row.pe_ratio),
                pct_cell(row.dividend_yield),
                pct_cell(row.revenue_growth_5y),
                cell(row.debt_ratio),
                pct_cell(row.roe),
                row.score
            ));
        }

        output
    }
}

impl fmt::Display for RankingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii_table())
    }
}
