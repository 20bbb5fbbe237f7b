//! Raw per-company financial statement figures.

use serde::{Deserialize, Serialize};

/// Sector label used when the provider did not supply one.
pub const UNKNOWN_SECTOR: &str = "N/A";

/// Revenue reported for one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualRevenue {
    /// Fiscal year the figure belongs to
    pub fiscal_year: i32,
    /// Total revenue for the year
    pub revenue: f64,
}

impl AnnualRevenue {
    /// Create a new annual revenue figure.
    pub const fn new(fiscal_year: i32, revenue: f64) -> Self {
        Self {
            fiscal_year,
            revenue,
        }
    }
}

/// Raw financial data for one company, as delivered by the fetch collaborator.
///
/// Every figure is optional. Missing fields are a normal, checkable state:
/// the ratio calculator turns them into undefined ratios instead of failing.
/// Non-finite numbers are treated exactly like missing ones by the accessor
/// methods, which is how all downstream code reads the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFinancials {
    /// Ticker symbol (unique company identifier)
    pub symbol: String,
    /// Company name
    pub name: Option<String>,
    /// Sector as reported by the provider
    pub sector: Option<String>,
    /// Latest share price
    pub price: Option<f64>,
    /// Trailing earnings per share
    pub eps: Option<f64>,
    /// Annual revenue for up to the last five fiscal years, in any order
    pub revenue_history: Vec<AnnualRevenue>,
    /// Book value per share
    pub book_value_per_share: Option<f64>,
    /// Annual dividend per share
    pub dividend_per_share: Option<f64>,
    /// Total debt
    pub total_debt: Option<f64>,
    /// Total equity (balance sheet)
    pub total_equity: Option<f64>,
    /// Net income (trailing fiscal year)
    pub net_income: Option<f64>,
    /// Shareholder equity attributable to common holders
    pub shareholder_equity: Option<f64>,
    /// Shares outstanding
    pub shares_outstanding: Option<f64>,
    /// Market capitalisation, if the provider reports it directly
    pub market_cap: Option<f64>,
}

const fn finite(value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

impl RawFinancials {
    /// Start building a record for `symbol`.
    pub fn builder(symbol: impl Into<String>) -> RawFinancialsBuilder {
        RawFinancialsBuilder::new(symbol)
    }

    /// Company name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.symbol.as_str())
    }

    /// Sector, falling back to [`UNKNOWN_SECTOR`].
    pub fn sector_or_default(&self) -> &str {
        self.sector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNKNOWN_SECTOR)
    }

    /// Share price, if present and finite.
    pub const fn price(&self) -> Option<f64> {
        finite(self.price)
    }

    /// Trailing EPS, if present and finite.
    pub const fn eps(&self) -> Option<f64> {
        finite(self.eps)
    }

    /// Book value per share, if present and finite.
    pub const fn book_value_per_share(&self) -> Option<f64> {
        finite(self.book_value_per_share)
    }

    /// Dividend per share, if present and finite.
    pub const fn dividend_per_share(&self) -> Option<f64> {
        finite(self.dividend_per_share)
    }

    /// Total debt, if present and finite.
    pub const fn total_debt(&self) -> Option<f64> {
        finite(self.total_debt)
    }

    /// Total equity, if present and finite.
    pub const fn total_equity(&self) -> Option<f64> {
        finite(self.total_equity)
    }

    /// Net income, if present and finite.
    pub const fn net_income(&self) -> Option<f64> {
        finite(self.net_income)
    }

    /// Shareholder equity, if present and finite.
    pub const fn shareholder_equity(&self) -> Option<f64> {
        finite(self.shareholder_equity)
    }

    /// Market capitalisation: the reported figure, or price times shares
    /// outstanding when both are available.
    pub fn market_cap(&self) -> Option<f64> {
        finite(self.market_cap).or_else(|| {
            let shares = finite(self.shares_outstanding)?;
            let price = self.price()?;
            Some(price * shares)
        })
    }

    /// Finite revenue figures for the `years` calendar years ending at the
    /// latest fiscal year on record, ordered oldest first.
    ///
    /// The window is bounded by fiscal year, not by entry count, so a gap in
    /// the history leaves fewer entries rather than reaching further back.
    /// When a fiscal year appears more than once the entry listed last wins.
    pub fn revenue_window(&self, years: usize) -> Vec<AnnualRevenue> {
        let mut history: Vec<AnnualRevenue> = Vec::with_capacity(self.revenue_history.len());
        for entry in self.revenue_history.iter().filter(|r| r.revenue.is_finite()) {
            match history.iter_mut().find(|r| r.fiscal_year == entry.fiscal_year) {
                Some(existing) => *existing = *entry,
                None => history.push(*entry),
            }
        }
        history.sort_by_key(|r| r.fiscal_year);

        let Some(latest) = history.last().map(|r| r.fiscal_year) else {
            return history;
        };
        if years == 0 {
            return Vec::new();
        }
        let span = i32::try_from(years - 1).unwrap_or(i32::MAX);
        let first_year = latest.saturating_sub(span);
        history.retain(|r| r.fiscal_year >= first_year);
        history
    }

    /// Revenue of the most recent fiscal year on record.
    pub fn latest_revenue(&self) -> Option<f64> {
        self.revenue_window(1).first().map(|r| r.revenue)
    }
}

/// Builder for [`RawFinancials`].
#[derive(Debug, Clone)]
pub struct RawFinancialsBuilder {
    record: RawFinancials,
}

impl RawFinancialsBuilder {
    /// Create a builder for `symbol` with every figure missing.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            record: RawFinancials {
                symbol: symbol.into(),
                ..RawFinancials::default()
            },
        }
    }

    /// Set the company name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = Some(name.into());
        self
    }

    /// Set the sector.
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.record.sector = Some(sector.into());
        self
    }

    /// Set the share price.
    pub const fn price(mut self, price: f64) -> Self {
        self.record.price = Some(price);
        self
    }

    /// Set trailing EPS.
    pub const fn eps(mut self, eps: f64) -> Self {
        self.record.eps = Some(eps);
        self
    }

    /// Add a fiscal year's revenue.
    pub fn revenue(mut self, fiscal_year: i32, revenue: f64) -> Self {
        self.record
            .revenue_history
            .push(AnnualRevenue::new(fiscal_year, revenue));
        self
    }

    /// Set book value per share.
    pub const fn book_value_per_share(mut self, value: f64) -> Self {
        self.record.book_value_per_share = Some(value);
        self
    }

    /// Set dividend per share.
    pub const fn dividend_per_share(mut self, value: f64) -> Self {
        self.record.dividend_per_share = Some(value);
        self
    }

    /// Set total debt.
    pub const fn total_debt(mut self, value: f64) -> Self {
        self.record.total_debt = Some(value);
        self
    }

    /// Set total equity.
    pub const fn total_equity(mut self, value: f64) -> Self {
        self.record.total_equity = Some(value);
        self
    }

    /// Set net income.
    pub const fn net_income(mut self, value: f64) -> Self {
        self.record.net_income = Some(value);
        self
    }

    /// Set shareholder equity.
    pub const fn shareholder_equity(mut self, value: f64) -> Self {
        self.record.shareholder_equity = Some(value);
        self
    }

    /// Set shares outstanding.
    pub const fn shares_outstanding(mut self, value: f64) -> Self {
        self.record.shares_outstanding = Some(value);
        self
    }

    /// Set market capitalisation.
    pub const fn market_cap(mut self, value: f64) -> Self {
        self.record.market_cap = Some(value);
        self
    }

    /// Finish the record.
    pub fn build(self) -> RawFinancials {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_display_name_falls_back_to_symbol() {
        let record = RawFinancials::builder("MSFT").build();
        assert_eq!(record.display_name(), "MSFT");
        assert_eq!(record.sector_or_default(), UNKNOWN_SECTOR);

        let named = RawFinancials::builder("MSFT")
            .name("Microsoft Corporation")
            .sector("Technology")
            .build();
        assert_eq!(named.display_name(), "Microsoft Corporation");
        assert_eq!(named.sector_or_default(), "Technology");
    }

    #[test]
    fn test_non_finite_values_read_as_missing() {
        let record = RawFinancials::builder("AAPL")
            .price(f64::NAN)
            .eps(f64::INFINITY)
            .build();
        assert!(record.price().is_none());
        assert!(record.eps().is_none());
    }

    #[test]
    fn test_market_cap_derivation() {
        let derived = RawFinancials::builder("AAPL")
            .price(100.0)
            .shares_outstanding(1_000.0)
            .build();
        assert_eq!(derived.market_cap(), Some(100_000.0));

        let reported = RawFinancials::builder("AAPL")
            .price(100.0)
            .shares_outstanding(1_000.0)
            .market_cap(5.0)
            .build();
        assert_eq!(reported.market_cap(), Some(5.0));

        let missing = RawFinancials::builder("AAPL").price(100.0).build();
        assert!(missing.market_cap().is_none());
    }

    #[test]
    fn test_revenue_window_orders_and_truncates() {
        let record = RawFinancials::builder("AAPL")
            .revenue(2023, 130.0)
            .revenue(2018, 80.0)
            .revenue(2021, 110.0)
            .revenue(2019, 90.0)
            .revenue(2022, 120.0)
            .revenue(2020, 100.0)
            .build();

        let window = record.revenue_window(5);
        let years: Vec<i32> = window.iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
        assert_eq!(record.latest_revenue(), Some(130.0));
    }

    #[rstest]
    #[case::contiguous(&[2019, 2020, 2021, 2022, 2023], 5, vec![2019, 2020, 2021, 2022, 2023])]
    #[case::gap_stays_in_window(&[2005, 2019, 2021, 2022, 2023], 5, vec![2019, 2021, 2022, 2023])]
    #[case::endpoints_only(&[2019, 2023], 5, vec![2019, 2023])]
    #[case::single_year(&[2018, 2023], 1, vec![2023])]
    #[case::zero_years(&[2023], 0, vec![])]
    fn test_revenue_window_is_bounded_by_fiscal_year(
        #[case] years: &[i32],
        #[case] window: usize,
        #[case] expected: Vec<i32>,
    ) {
        let record = years
            .iter()
            .fold(RawFinancials::builder("AAPL"), |b, year| b.revenue(*year, 100.0))
            .build();
        let got: Vec<i32> = record.revenue_window(window).iter().map(|r| r.fiscal_year).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_revenue_window_deduplicates_years() {
        let record = RawFinancials::builder("AAPL")
            .revenue(2022, 100.0)
            .revenue(2023, f64::NAN)
            .revenue(2022, 105.0)
            .build();

        let window = record.revenue_window(5);
        assert_eq!(window, vec![AnnualRevenue::new(2022, 105.0)]);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{"symbol": "IBM", "price": 150.5}"#;
        let record: RawFinancials = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol, "IBM");
        assert_eq!(record.price(), Some(150.5));
        assert!(record.revenue_history.is_empty());
        assert!(record.eps().is_none());
    }
}
