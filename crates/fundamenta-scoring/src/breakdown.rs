//! Per-company score breakdown.

use fundamenta_ratios::RatioKind;
use serde::Serialize;

/// Score of one ratio and the weight it carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScore {
    /// Which ratio
    pub ratio: RatioKind,
    /// Sub-score in `[0, 10]`
    pub score: f64,
    /// Normalised weight used in the composite
    pub weight: f64,
    /// Whether the ratio was undefined and scored neutrally
    pub neutral: bool,
}

impl SubScore {
    /// Contribution to the composite (`score * weight`).
    pub const fn contribution(&self) -> f64 {
        self.score * self.weight
    }
}

/// Sub-scores for all eight ratios plus the weighted composite.
///
/// Produced once per company by the [`Scorer`](crate::Scorer); the weights
/// used are kept alongside for auditing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Sub-scores in [`RatioKind::ALL`] order
    pub sub_scores: [SubScore; 8],
    /// Weighted composite in `[0, 10]`
    pub composite: f64,
}

impl ScoreBreakdown {
    /// Sub-score entry for one ratio.
    pub const fn get(&self, kind: RatioKind) -> &SubScore {
        // sub_scores is built in RatioKind::ALL order
        &self.sub_scores[kind as usize]
    }

    /// Sub-score value for one ratio.
    pub const fn sub_score(&self, kind: RatioKind) -> f64 {
        self.get(kind).score
    }

    /// Normalised weights used, in [`RatioKind::ALL`] order.
    pub fn weights(&self) -> [f64; 8] {
        self.sub_scores.map(|s| s.weight)
    }

    /// Ratios that received the neutral sub-score.
    pub fn neutral_ratios(&self) -> Vec<RatioKind> {
        self.sub_scores
            .iter()
            .filter(|s| s.neutral)
            .map(|s| s.ratio)
            .collect()
    }

    /// Sub-scores ordered by contribution to the composite, largest first.
    pub fn by_contribution(&self) -> Vec<SubScore> {
        let mut sorted = self.sub_scores.to_vec();
        sorted.sort_by(|a, b| {
            b.contribution()
                .total_cmp(&a.contribution())
                .then(a.ratio.cmp(&b.ratio))
        });
        sorted
    }
}
