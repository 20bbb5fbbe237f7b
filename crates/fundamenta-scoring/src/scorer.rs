//! Composite scoring
//!
//! Each defined ratio is scored against its bands in the ratio's direction;
//! an undefined ratio takes the neutral sub-score. The composite is
//!
//! ```text
//! composite = clamp(sum(sub_score_i * w_i), 0, 10),  sum(w_i) = 1
//! ```

use crate::bands::{MAX_SCORE, MIN_SCORE};
use crate::breakdown::{ScoreBreakdown, SubScore};
use crate::config::{ScoringConfig, Weights};
use crate::error::Result;
use fundamenta_ratios::{RatioKind, RatioSet};
use tracing::debug;

/// Scores ratio sets against a validated configuration.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
    weights: Weights,
}

impl Scorer {
    /// Create a scorer, validating the configuration once.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let weights = config.weights.normalised()?;
        debug!(?weights, neutral = config.neutral_score, "scorer configured");
        Ok(Self { config, weights })
    }

    /// The configuration as supplied.
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Weights after normalisation.
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Sub-score of one ratio value, neutral when undefined.
    pub fn sub_score(&self, kind: RatioKind, value: Option<f64>) -> f64 {
        match value.filter(|v| v.is_finite()) {
            Some(v) => self.config.bands.get(kind).sub_score(v, kind.direction()),
            None => self.config.neutral_score,
        }
    }

    /// Score one company's ratios.
    pub fn score(&self, ratios: &RatioSet) -> ScoreBreakdown {
        let sub_scores = RatioKind::ALL.map(|kind| {
            let value = ratios.get(kind).filter(|v| v.is_finite());
            SubScore {
                ratio: kind,
                score: self.sub_score(kind, value),
                weight: self.weights.get(kind),
                neutral: value.is_none(),
            }
        });
        let composite = sub_scores
            .iter()
            .map(SubScore::contribution)
            .sum::<f64>()
            .clamp(MIN_SCORE, MAX_SCORE);

        ScoreBreakdown {
            sub_scores,
            composite,
        }
    }
}
