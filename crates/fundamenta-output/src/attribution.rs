//! Score attribution for a single company.
//!
//! Decomposes a composite score into per-ratio contributions
//! (`sub_score * weight`) so a reader can see why a company ranked where it
//! did.

use fundamenta_ratios::{DataQualityNote, RatioKind, RatioSet};
use fundamenta_scoring::{RankedEntry, ScoreBreakdown};
use serde::Serialize;
use std::fmt;

/// Contribution of a single ratio to the composite score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatioAttribution {
    /// Which ratio.
    pub ratio: RatioKind,

    /// Ratio value, `None` when undefined.
    pub value: Option<f64>,

    /// Sub-score in `[0, 10]`.
    pub sub_score: f64,

    /// Normalised weight.
    pub weight: f64,

    /// Contribution to the composite (sub_score * weight).
    pub contribution: f64,

    /// Contribution as a percentage of the composite.
    pub contribution_pct: f64,

    /// Whether the sub-score is the neutral fallback.
    pub neutral: bool,
}

impl RatioAttribution {
    /// Formatted ratio value, `n/a` when undefined.
    pub fn formatted_value(&self) -> String {
        match self.value {
            Some(v) if self.ratio.is_percentage() => format!("{:.2}%", v * 100.0),
            Some(v) => format!("{v:.2}"),
            None => "n/a".to_string(),
        }
    }
}

impl fmt::Display for RatioAttribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {:.1} x {:.2} = {:.2}{}",
            self.ratio.label(),
            self.formatted_value(),
            self.sub_score,
            self.weight,
            self.contribution,
            if self.neutral { " (neutral)" } else { "" }
        )
    }
}

/// Company-level score attribution.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreAttribution {
    /// Ticker symbol.
    pub symbol: String,

    /// Company name.
    pub name: String,

    /// Rank position, when taken from a ranking.
    pub rank: Option<usize>,

    /// Composite score.
    pub composite: f64,

    /// Per-ratio contributions in reporting order.
    pub ratios: Vec<RatioAttribution>,

    /// Data-quality notes recorded while computing the ratios.
    pub notes: Vec<String>,
}

impl ScoreAttribution {
    /// Build an attribution from a company's ratios and score.
    pub fn new(symbol: &str, name: &str, ratios: &RatioSet, score: &ScoreBreakdown) -> Self {
        let composite = score.composite;
        let rows = score
            .sub_scores
            .iter()
            .map(|sub| {
                let contribution = sub.contribution();
                let contribution_pct = if composite.abs() > 1e-10 {
                    contribution / composite * 100.0
                } else {
                    0.0
                };
                RatioAttribution {
                    ratio: sub.ratio,
                    value: ratios.get(sub.ratio),
                    sub_score: sub.score,
                    weight: sub.weight,
                    contribution,
                    contribution_pct,
                    neutral: sub.neutral,
                }
            })
            .collect();

        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            rank: None,
            composite,
            ratios: rows,
            notes: ratios.notes.iter().map(DataQualityNote::to_string).collect(),
        }
    }

    /// Attribution for one entry of a ranking.
    pub fn from_entry(entry: &RankedEntry) -> Self {
        let company = &entry.company;
        Self {
            rank: Some(entry.rank),
            ..Self::new(&company.symbol, &company.name, &company.ratios, &company.score)
        }
    }

    /// Ratios scored neutrally.
    pub fn neutral_ratios(&self) -> Vec<RatioKind> {
        self.ratios
            .iter()
            .filter(|r| r.neutral)
            .map(|r| r.ratio)
            .collect()
    }

    fn heading(&self) -> String {
        match self.rank {
            Some(rank) => format!("{} ({}) - rank {}", self.name, self.symbol, rank),
            None => format!("{} ({})", self.name, self.symbol),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nScore Attribution: {}\n", self.heading()));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "{:<16} {:>12} {:>10} {:>10} {:>13} {:>12}\n",
            "Ratio", "Value", "Score", "Weight", "Contribution", "% of Total"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.ratios {
            let marker = if row.neutral { "*" } else { "" };
            output.push_str(&format!(
                "{:<16} {:>12} {:>9.1}{:1} {:>10.2} {:>13.3} {:>11.1}%\n",
                row.ratio.label(),
                row.formatted_value(),
                row.sub_score,
                marker,
                row.weight,
                row.contribution,
                row.contribution_pct
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12} {:>10} {:>10} {:>13.3}\n",
            "Composite", "", "", "", self.composite
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.ratios.iter().any(|r| r.neutral) {
            output.push_str("* undefined ratio, neutral sub-score\n");
        }
        for note in &self.notes {
            output.push_str(&format!("note: {note}\n"));
        }

        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Score Attribution: {}\n\n", self.heading()));
        output.push_str(&format!("**Composite:** {:.2}\n\n", self.composite));

        output.push_str("| Ratio | Value | Score | Weight | Contribution | % of Total |\n");
        output.push_str("|-------|-------|-------|--------|--------------|------------|\n");

        for row in &self.ratios {
            output.push_str(&format!(
                "| {} | {} | {:.1}{} | {:.2} | {:.3} | {:.1}% |\n",
                row.ratio.label(),
                row.formatted_value(),
                row.sub_score,
                if row.neutral { " (neutral)" } else { "" },
                row.weight,
                row.contribution,
                row.contribution_pct
            ));
        }

        if !self.notes.is_empty() {
            output.push_str("\n## Data Quality\n\n");
            for note in &self.notes {
                output.push_str(&format!("- {note}\n"));
            }
        }

        output
    }
}

impl fmt::Display for ScoreAttribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Attribution for {}:", self.heading())?;
        writeln!(f, "  Composite: {:.2}", self.composite)?;
        writeln!(f, "  Ratios:")?;
        for row in &self.ratios {
            writeln!(f, "    {row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fundamenta_scoring::{Scorer, ScoringConfig};

    fn attribution() -> ScoreAttribution {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let ratios = RatioSet::empty()
            .with(RatioKind::PriceEarnings, 12.0)
            .with(RatioKind::DividendYield, 0.031)
            .with(RatioKind::DebtRatio, 0.4);
        let score = scorer.score(&ratios);
        ScoreAttribution::new("KO", "Coca-Cola", &ratios, &score)
    }

    #[test]
    fn test_contributions_sum_to_composite() {
        let attribution = attribution();
        let total: f64 = attribution.ratios.iter().map(|r| r.contribution).sum();
        assert_relative_eq!(total, attribution.composite, epsilon = 1e-9);
        let pct: f64 = attribution.ratios.iter().map(|r| r.contribution_pct).sum();
        assert_relative_eq!(pct, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_neutral_rows() {
        let attribution = attribution();
        assert_eq!(attribution.neutral_ratios().len(), 5);
        assert!(!attribution.neutral_ratios().contains(&RatioKind::PriceEarnings));
    }

    #[test]
    fn test_value_formatting() {
        let attribution = attribution();
        assert_eq!(attribution.ratios[0].formatted_value(), "12.00");
        assert_eq!(attribution.ratios[3].formatted_value(), "3.10%");
        assert_eq!(attribution.ratios[1].formatted_value(), "n/a");
    }

    #[test]
    fn test_ascii_table() {
        let table = attribution().to_ascii_table();
        assert!(table.contains("Score Attribution: Coca-Cola (KO)"));
        assert!(table.contains("P/E"));
        assert!(table.contains("Composite"));
        assert!(table.contains("neutral sub-score"));
    }

    #[test]
    fn test_markdown() {
        let markdown = attribution().to_markdown();
        assert!(markdown.starts_with("# Score Attribution: Coca-Cola (KO)"));
        assert!(markdown.contains("| Ratio | Value |"));
        assert!(markdown.contains("(neutral)"));
    }
}
