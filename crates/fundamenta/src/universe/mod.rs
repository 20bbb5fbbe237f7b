//! Stock universes.
//!
//! A universe is the set of symbols a run should analyse. A snapshot is
//! itself a universe (everything it holds); a [`WatchList`] narrows it to a
//! configured list.

pub mod watchlist;

pub use watchlist::WatchList;

use fundamenta_data::Snapshot;

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s == symbol)
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for Snapshot {
    fn symbols(&self) -> Vec<String> {
        Self::symbols(self)
    }
}
