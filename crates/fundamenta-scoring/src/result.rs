//! The ranked output table.

use crate::breakdown::ScoreBreakdown;
use crate::config::RankingConfig;
use fundamenta_ratios::RatioSet;
use serde::Serialize;

/// A company with its ratios and score, ready to be ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCompany {
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Sector
    pub sector: String,
    /// Derived ratios
    pub ratios: RatioSet,
    /// Score breakdown
    pub score: ScoreBreakdown,
}

impl ScoredCompany {
    /// Composite score.
    pub const fn composite(&self) -> f64 {
        self.score.composite
    }
}

/// One row of a [`RankedResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based rank position
    pub rank: usize,
    /// The ranked company
    #[serde(flatten)]
    pub company: ScoredCompany,
}

impl RankedEntry {
    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.company.symbol
    }

    /// Composite score.
    pub const fn composite(&self) -> f64 {
        self.company.score.composite
    }
}

/// Companies ordered by composite score, highest first.
///
/// Read-only once built by the [`Ranker`](crate::Ranker).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
    #[serde(skip)]
    config: RankingConfig,
}

impl RankedResult {
    pub(crate) const fn new(entries: Vec<RankedEntry>, config: RankingConfig) -> Self {
        Self { entries, config }
    }

    /// All entries in rank order.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Iterate entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// Number of ranked companies.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ranked.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selection parameters the ranking was built with.
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Entry for a symbol, if ranked.
    pub fn get(&self, symbol: &str) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| e.symbol() == symbol)
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The configured top-N slice.
    pub fn top_n(&self) -> &[RankedEntry] {
        self.top(self.config.top_n)
    }

    /// Entries with a composite score of at least `min_score`, in rank order.
    pub fn above(&self, min_score: f64) -> Vec<&RankedEntry> {
        self.entries
            .iter()
            .filter(|e| e.composite() >= min_score)
            .collect()
    }

    /// Entries at or above the configured minimum score.
    pub fn eligible(&self) -> Vec<&RankedEntry> {
        self.above(self.config.min_score)
    }

    /// Consume the result, returning its entries.
    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
