//! Alerts for companies at or above the notification threshold.
//!
//! An [`AlertMessage`] is built from the top-N slice of a ranking, keeping
//! the companies that also meet the minimum score, and handed to a
//! [`Notifier`]. Delivery channels live behind the trait; the
//! crate ships [`WriterNotifier`], which writes the message to any
//! `io::Write`.

use crate::export::ExportError;
use fundamenta_ratios::RatioKind;
use fundamenta_scoring::{RankedEntry, RankedResult};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::info;

/// One company in an alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertLine {
    /// Company name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Composite score
    pub score: f64,
    /// Sector
    pub sector: String,
    /// Price / earnings, if defined
    pub pe_ratio: Option<f64>,
    /// Dividend yield as a fraction, if defined
    pub dividend_yield: Option<f64>,
}

impl From<&RankedEntry> for AlertLine {
    fn from(entry: &RankedEntry) -> Self {
        let company = &entry.company;
        Self {
            name: company.name.clone(),
            symbol: company.symbol.clone(),
            score: company.score.composite,
            sector: company.sector.clone(),
            pe_ratio: company.ratios.get(RatioKind::PriceEarnings),
            dividend_yield: company.ratios.get(RatioKind::DividendYield),
        }
    }
}

impl fmt::Display for AlertLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) - Score: {:.1}", self.name, self.symbol, self.score)?;
        writeln!(f, "Sector: {}", self.sector)?;
        let pe = self
            .pe_ratio
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        let dividend = self
            .dividend_yield
            .map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0));
        write!(f, "P/E: {pe} | Div: {dividend}")
    }
}

/// Alert listing the eligible top-N companies, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertMessage {
    /// Threshold the companies met
    pub min_score: f64,
    /// Eligible companies
    pub lines: Vec<AlertLine>,
}

impl AlertMessage {
    /// Build an alert from the top-N entries at or above `min_score`.
    ///
    /// Companies ranked below the configured top N are never reported.
    /// Returns `None` when no company qualifies, so nothing is sent.
    pub fn from_result(result: &RankedResult, min_score: f64) -> Option<Self> {
        let lines: Vec<AlertLine> = result
            .top_n()
            .iter()
            .filter(|e| e.composite() >= min_score)
            .map(AlertLine::from)
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(Self { min_score, lines })
        }
    }

    /// Build an alert using the ranking's configured threshold.
    pub fn eligible(result: &RankedResult) -> Option<Self> {
        Self::from_result(result, result.config().min_score)
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top stocks alert (score >= {:.1})", self.min_score)?;
        writeln!(f)?;
        writeln!(f, "Best stocks by fundamental analysis:")?;
        for line in &self.lines {
            writeln!(f)?;
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A delivery channel for alerts.
pub trait Notifier {
    /// Deliver one alert.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn send(&mut self, message: &AlertMessage) -> Result<(), ExportError>;
}

/// Notifier that writes alerts as plain text.
#[derive(Debug)]
pub struct WriterNotifier<W: Write> {
    writer: W,
}

impl<W: Write> WriterNotifier<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterNotifier<std::io::Stdout> {
    /// Notifier writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Notifier for WriterNotifier<W> {
    fn send(&mut self, message: &AlertMessage) -> Result<(), ExportError> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Send an alert for the eligible top-N companies, if any.
///
/// Returns whether a message was sent.
pub fn notify_eligible(
    result: &RankedResult,
    notifier: &mut dyn Notifier,
) -> Result<bool, ExportError> {
    let min_score = result.config().min_score;
    match AlertMessage::from_result(result, min_score) {
        Some(message) => {
            notifier.send(&message)?;
            info!(companies = message.lines.len(), min_score, "alert sent");
            Ok(true)
        }
        None => {
            info!(min_score, "no companies at or above the minimum score, no alert sent");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundamenta_ratios::RatioSet;
    use fundamenta_scoring::{
        Ranker, RankingConfig, ScoredCompany, Scorer, ScoringConfig, Weights,
    };

    fn ranked(min_score: f64) -> RankedResult {
        ranked_with(RankingConfig::default().with_min_score(min_score))
    }

    fn ranked_with(config: RankingConfig) -> RankedResult {
        let scorer = Scorer::new(ScoringConfig {
            weights: Weights {
                pe_ratio: 1.0,
                ps_ratio: 0.0,
                pb_ratio: 0.0,
                dividend_yield: 0.0,
                eps: 0.0,
                revenue_growth: 0.0,
                roe: 0.0,
                debt_ratio: 0.0,
            },
            ..ScoringConfig::default()
        })
        .unwrap();
        let make = |symbol: &str, name: &str, ratios: RatioSet| ScoredCompany {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: "Technology".to_string(),
            score: scorer.score(&ratios),
            ratios,
        };
        Ranker::new(config)
            .unwrap()
            .rank(vec![
                make(
                    "MSFT",
                    "Microsoft Corp.",
                    RatioSet::empty()
                        .with(RatioKind::PriceEarnings, 9.5)
                        .with(RatioKind::DividendYield, 0.0075),
                ),
                make("AAPL", "Apple Inc.", RatioSet::empty().with(RatioKind::PriceEarnings, 12.0)),
                make("NFLX", "Netflix", RatioSet::empty()),
            ])
    }

    #[test]
    fn test_alert_lists_eligible_companies() {
        let message = AlertMessage::eligible(&ranked(7.0)).unwrap();
        let symbols: Vec<&str> = message.lines.iter().map(|l| l.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL"]);

        let text = message.to_string();
        assert!(text.contains("Microsoft Corp. (MSFT) - Score: 10.0"));
        assert!(text.contains("P/E: 9.50 | Div: 0.75%"));
        assert!(text.contains("Apple Inc. (AAPL) - Score: 8.0"));
        assert!(text.contains("Div: n/a"));
        assert!(!text.contains("NFLX"));
    }

    #[test]
    fn test_no_alert_when_nothing_eligible() {
        assert!(AlertMessage::eligible(&ranked(10.5)).is_none());

        let mut notifier = WriterNotifier::new(Vec::new());
        let sent = notify_eligible(&ranked(10.5), &mut notifier).unwrap();
        assert!(!sent);
        assert!(notifier.into_inner().is_empty());
    }

    #[test]
    fn test_writer_notifier_delivers_text() {
        let mut notifier = WriterNotifier::new(Vec::new());
        assert!(notify_eligible(&ranked(9.0), &mut notifier).unwrap());
        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(written.starts_with("Top stocks alert (score >= 9.0)"));
        assert!(written.contains("MSFT"));
        assert!(!written.contains("AAPL"));
    }

    #[test]
    fn test_alert_limited_to_top_n() {
        let result = ranked_with(RankingConfig::default().with_top_n(1).with_min_score(7.0));
        // Both MSFT and AAPL clear the threshold, only MSFT is in the top 1.
        assert_eq!(result.eligible().len(), 2);

        let message = AlertMessage::eligible(&result).unwrap();
        let symbols: Vec<&str> = message.lines.iter().map(|l| l.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT"]);

        let mut notifier = WriterNotifier::new(Vec::new());
        assert!(notify_eligible(&result, &mut notifier).unwrap());
        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(!written.contains("AAPL"));
    }
}
