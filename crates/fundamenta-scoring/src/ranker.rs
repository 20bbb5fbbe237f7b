//! Deterministic ranking
//!
//! Companies are sorted by composite score descending, then by symbol
//! ascending, so equal scores never leave the order to chance.

use crate::config::RankingConfig;
use crate::error::Result;
use crate::result::{RankedEntry, RankedResult, ScoredCompany};
use std::cmp::Ordering;
use tracing::info;

/// Orders scored companies and applies the selection parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    /// Create a ranker, validating the configuration once.
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The selection parameters.
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank companies. The output order depends only on scores and symbols,
    /// never on input order.
    pub fn rank(&self, mut companies: Vec<ScoredCompany>) -> RankedResult {
        companies.sort_by(compare);

        let entries: Vec<RankedEntry> = companies
            .into_iter()
            .enumerate()
            .map(|(i, company)| RankedEntry {
                rank: i + 1,
                company,
            })
            .collect();

        let result = RankedResult::new(entries, self.config);
        info!(
            ranked = result.len(),
            eligible = result.eligible().len(),
            min_score = self.config.min_score,
            "ranking complete"
        );
        result
    }
}

/// Composite descending, then symbol ascending.
pub fn compare(a: &ScoredCompany, b: &ScoredCompany) -> Ordering {
    b.composite()
        .total_cmp(&a.composite())
        .then_with(|| a.symbol.cmp(&b.symbol))
}
