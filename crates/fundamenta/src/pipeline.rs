//! Screening pipeline.
//!
//! Runs the full chain for a batch of records:
//!
//! ```text
//! RawFinancials -> RatioSet -> ScoreBreakdown -> ScoredCompany -> RankedResult
//! ```
//!
//! Per-company work is independent and fans out over rayon; the ranking is a
//! single sort over the collected set, so the output never depends on thread
//! scheduling.

use derive_more::Display;
use fundamenta_data::{FetchFailure, RawFinancials, Snapshot};
use fundamenta_ratios::RatioCalculator;
use fundamenta_scoring::{
    ConfigError, RankedResult, Ranker, RankingConfig, ScoredCompany, Scorer, ScoringConfig,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// Why a record was left out before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The record has no symbol.
    #[display("empty symbol")]
    EmptySymbol,
    /// An earlier record carried the same symbol.
    #[display("duplicate symbol")]
    DuplicateSymbol,
}

/// A record dropped before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the input.
    pub index: usize,
    /// Symbol as supplied.
    pub symbol: String,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Outcome of one screening run.
#[derive(Debug, Clone)]
pub struct Screening {
    /// The ranking.
    pub result: RankedResult,
    /// Records dropped before scoring.
    pub skipped: Vec<SkippedRecord>,
    /// Symbols the data source reported as failed.
    pub failures: Vec<FetchFailure>,
}

impl Screening {
    /// Symbols of the skipped records.
    pub fn skipped_symbols(&self) -> Vec<String> {
        self.skipped.iter().map(|s| s.symbol.clone()).collect()
    }
}

/// Computes ratios, scores, and ranks a batch of companies.
#[derive(Debug)]
pub struct Screener {
    calculator: RatioCalculator,
    scorer: Scorer,
    ranker: Ranker,
}

impl Screener {
    /// Create a screener from a configured scorer and ranker.
    pub fn new(scorer: Scorer, ranker: Ranker) -> Self {
        Self {
            calculator: RatioCalculator::new(),
            scorer,
            ranker,
        }
    }

    /// Validate both configurations and build a screener.
    pub fn from_configs(
        scoring: ScoringConfig,
        ranking: RankingConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(Scorer::new(scoring)?, Ranker::new(ranking)?))
    }

    /// Replace the ratio calculator.
    pub fn with_calculator(mut self, calculator: RatioCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// The scorer.
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// The ranker.
    pub const fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Compute ratios and score for a single company.
    pub fn score_company(&self, data: &RawFinancials) -> ScoredCompany {
        let ratios = self.calculator.compute(data);
        let score = self.scorer.score(&ratios);
        ScoredCompany {
            symbol: data.symbol.trim().to_string(),
            name: data.display_name().to_string(),
            sector: data.sector_or_default().to_string(),
            ratios,
            score,
        }
    }

    /// Screen a batch of records.
    ///
    /// Records with an empty symbol, or a symbol already seen earlier in the
    /// batch, are skipped with a warning. Everything else is scored and
    /// ranked.
    pub fn screen<'a, I>(&self, records: I) -> Screening
    where
        I: IntoIterator<Item = &'a RawFinancials>,
    {
        let (accepted, skipped) = partition_records(records);
        info!(
            companies = accepted.len(),
            skipped = skipped.len(),
            "screening companies"
        );

        let scored: Vec<ScoredCompany> = accepted
            .par_iter()
            .map(|data| self.score_company(data))
            .collect();

        Screening {
            result: self.ranker.rank(scored),
            skipped,
            failures: Vec::new(),
        }
    }

    /// Screen every record of a snapshot, carrying its fetch failures along.
    pub fn screen_snapshot(&self, snapshot: &Snapshot) -> Screening {
        Screening {
            failures: snapshot.failures.clone(),
            ..self.screen(&snapshot.companies)
        }
    }
}

fn partition_records<'a, I>(records: I) -> (Vec<&'a RawFinancials>, Vec<SkippedRecord>)
where
    I: IntoIterator<Item = &'a RawFinancials>,
{
    let mut seen = HashSet::new();
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let symbol = record.symbol.trim();
        let reason = if symbol.is_empty() {
            Some(SkipReason::EmptySymbol)
        } else if !seen.insert(symbol.to_string()) {
            Some(SkipReason::DuplicateSymbol)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                warn!(index, symbol = %record.symbol, %reason, "skipping record");
                skipped.push(SkippedRecord {
                    index,
                    symbol: record.symbol.clone(),
                    reason,
                });
            }
            None => accepted.push(record),
        }
    }

    (accepted, skipped)
}
