//! Configured list of symbols to analyse.

use crate::universe::Universe;
use fundamenta_data::{RawFinancials, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// An ordered, de-duplicated list of ticker symbols.
///
/// Symbols are trimmed and upper-cased on construction; blanks are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WatchList {
    symbols: Vec<String>,
}

impl WatchList {
    /// Create a watch list from symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let symbols = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        Self { symbols }
    }

    /// Parse a comma-separated list such as `"AAPL, msft,GOOGL"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether the list names no symbols.
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Records from `snapshot` whose symbol is on the list, in list order.
    ///
    /// Listed symbols absent from the snapshot are logged and left out.
    pub fn select<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a RawFinancials> {
        self.symbols
            .iter()
            .filter_map(|symbol| {
                let record = snapshot
                    .companies
                    .iter()
                    .find(|c| c.symbol.trim().eq_ignore_ascii_case(symbol));
                if record.is_none() {
                    warn!(symbol = %symbol, "watch-list symbol not present in snapshot");
                }
                record
            })
            .collect()
    }

    /// Owned copy of [`select`](Self::select).
    pub fn filter(&self, snapshot: &Snapshot) -> Vec<RawFinancials> {
        self.select(snapshot).into_iter().cloned().collect()
    }
}

impl Universe for WatchList {
    fn symbols(&self) -> Vec<String> {
        self.symbols.clone()
    }

    fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.eq_ignore_ascii_case(symbol.trim()))
    }

    fn size(&self) -> usize {
        self.symbols.len()
    }
}

impl From<Vec<String>> for WatchList {
    fn from(symbols: Vec<String>) -> Self {
        Self::new(symbols)
    }
}

impl From<WatchList> for Vec<String> {
    fn from(list: WatchList) -> Self {
        list.symbols
    }
}
