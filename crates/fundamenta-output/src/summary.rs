//! Screening summary.
//!
//! Counts for one screening run: how many companies were scored, skipped,
//! or reported as failed upstream, how many cleared the alert threshold, and
//! how often each ratio was undefined.

use fundamenta_ratios::RatioKind;
use fundamenta_scoring::RankedResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate statistics for a screening run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScreeningSummary {
    /// Companies ranked.
    pub scored: usize,

    /// Input records skipped (empty or duplicate symbol).
    pub skipped: usize,

    /// Symbols the data source could not fetch.
    pub upstream_failures: usize,

    /// Companies at or above the minimum score.
    pub eligible: usize,

    /// Minimum score used for eligibility.
    pub min_score: f64,

    /// Mean composite score, `None` when nothing was ranked.
    pub mean_composite: Option<f64>,

    /// Highest composite score, `None` when nothing was ranked.
    pub best_composite: Option<f64>,

    /// Number of companies for which each ratio was undefined.
    pub undefined_by_ratio: BTreeMap<RatioKind, usize>,

    /// Companies whose revenue growth covers a partial span.
    pub partial_growth: usize,
}

impl ScreeningSummary {
    /// Summarise a ranking.
    ///
    /// # Arguments
    ///
    /// * `result` - The ranking
    /// * `skipped` - Input records dropped before scoring
    /// * `upstream_failures` - Symbols the data source reported as failed
    pub fn new(result: &RankedResult, skipped: usize, upstream_failures: usize) -> Self {
        let mut undefined_by_ratio: BTreeMap<RatioKind, usize> =
            RatioKind::ALL.into_iter().map(|k| (k, 0)).collect();
        let mut partial_growth = 0;
        let mut total = 0.0;
        let mut best: Option<f64> = None;

        for entry in result {
            let ratios = &entry.company.ratios;
            for kind in ratios.undefined() {
                *undefined_by_ratio.entry(kind).or_insert(0) += 1;
            }
            if ratios.has_partial_growth() {
                partial_growth += 1;
            }
            total += entry.composite();
            best = Some(best.map_or(entry.composite(), |b| b.max(entry.composite())));
        }

        let scored = result.len();
        let mean_composite = (scored > 0).then(|| total / scored as f64);

        Self {
            scored,
            skipped,
            upstream_failures,
            eligible: result.eligible().len(),
            min_score: result.config().min_score,
            mean_composite,
            best_composite: best,
            undefined_by_ratio,
            partial_growth,
        }
    }

    /// Undefined ratio values across all ranked companies.
    pub fn undefined_total(&self) -> usize {
        self.undefined_by_ratio.values().sum()
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nScreening Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<32} {:>16}\n", "Companies ranked", self.scored));
        output.push_str(&format!("{:<32} {:>16}\n", "Records skipped", self.skipped));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "Upstream failures", self.upstream_failures
        ));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            format!("Eligible (score >= {:.1})", self.min_score),
            self.eligible
        ));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "Mean composite",
            self.mean_composite
                .map_or_else(|| "n/a".to_string(), |m| format!("{m:.2}"))
        ));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "Partial growth spans", self.partial_growth
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str("Undefined ratios\n");
        for (kind, count) in &self.undefined_by_ratio {
            output.push_str(&format!("  {:<30} {:>16}\n", kind.label(), count));
        }
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output
    }
}

impl fmt::Display for ScreeningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ranked, {} skipped, {} failed upstream, {} eligible at >= {:.1}",
            self.scored, self.skipped, self.upstream_failures, self.eligible, self.min_score
        )?;
        if let Some(mean) = self.mean_composite {
            write!(f, ", mean score {mean:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fundamenta_ratios::{RatioSet, RevenueGrowth};
    use fundamenta_scoring::{Ranker, ScoredCompany, Scorer, ScoringConfig};

    fn company(scorer: &Scorer, symbol: &str, ratios: RatioSet) -> ScoredCompany {
        ScoredCompany {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "N/A".to_string(),
            score: scorer.score(&ratios),
            ratios,
        }
    }

    #[test]
    fn test_summary_counts() {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let partial = RatioSet {
            revenue_growth: Some(RevenueGrowth {
                rate: 0.12,
                fiscal_years: 3,
                span_years: 2,
                partial: true,
            }),
            ..RatioSet::empty()
        };
        let result = Ranker::default().rank(vec![
            company(&scorer, "A", RatioSet::empty().with(RatioKind::PriceEarnings, 8.0)),
            company(&scorer, "B", partial),
            company(&scorer, "C", RatioSet::empty()),
        ]);

        let summary = ScreeningSummary::new(&result, 2, 1);
        assert_eq!(summary.scored, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.upstream_failures, 1);
        assert_eq!(summary.eligible, 0);
        assert_eq!(summary.partial_growth, 1);
        assert_eq!(summary.undefined_by_ratio[&RatioKind::PriceEarnings], 2);
        assert_eq!(summary.undefined_by_ratio[&RatioKind::RevenueGrowth], 2);
        assert_eq!(summary.undefined_by_ratio[&RatioKind::DebtRatio], 3);
        assert!(summary.best_composite.unwrap() >= summary.mean_composite.unwrap());
    }

    #[test]
    fn test_empty_summary() {
        let summary = ScreeningSummary::new(&Ranker::default().rank(Vec::new()), 0, 4);
        assert_eq!(summary.scored, 0);
        assert!(summary.mean_composite.is_none());
        assert_eq!(summary.undefined_total(), 0);
        assert!(summary.to_string().starts_with("0 ranked, 0 skipped, 4 failed upstream"));
    }

    #[test]
    fn test_ascii_table() {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let result = Ranker::default().rank(vec![company(&scorer, "A", RatioSet::empty())]);
        let summary = ScreeningSummary::new(&result, 0, 0);
        assert_relative_eq!(summary.mean_composite.unwrap(), 5.0, epsilon = 1e-12);

        let table = summary.to_ascii_table();
        assert!(table.contains("Companies ranked"));
        assert!(table.contains("Eligible (score >= 7.0)"));
        assert!(table.contains("Revenue Growth"));
    }
}
