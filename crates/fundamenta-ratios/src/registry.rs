//! Ratio Registry
//!
//! Central registry for all available ratios. Allows ratio lookup by name and
//! grouping by category.

use crate::calculator::RatioCalculator;
use crate::kind::{Direction, RatioKind};
use derive_more::Display;
use serde::Serialize;
use std::collections::HashMap;

/// Available ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Value ratios (P/E, P/S, P/B, dividend yield)
    #[display("value")]
    Value,
    /// Quality ratios (ROE, debt ratio)
    #[display("quality")]
    Quality,
    /// Growth ratios (EPS, revenue growth)
    #[display("growth")]
    Growth,
}

impl RatioCategory {
    /// Parse a category name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "value" => Some(Self::Value),
            "quality" => Some(Self::Quality),
            "growth" => Some(Self::Growth),
            _ => None,
        }
    }
}

/// Ratio metadata
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Ratio name (unique identifier)
    pub name: &'static str,
    /// Ratio identifier
    pub kind: RatioKind,
    /// Ratio category
    pub category: RatioCategory,
    /// Scoring direction
    pub direction: Direction,
    /// Brief description of what the ratio measures
    pub description: &'static str,
    /// Raw input fields the ratio reads
    pub required_fields: &'static [&'static str],
}

const fn category_of(kind: RatioKind) -> RatioCategory {
    match kind {
        RatioKind::PriceEarnings
        | RatioKind::PriceSales
        | RatioKind::PriceBook
        | RatioKind::DividendYield => RatioCategory::Value,
        RatioKind::ReturnOnEquity | RatioKind::DebtRatio => RatioCategory::Quality,
        RatioKind::Eps | RatioKind::RevenueGrowth => RatioCategory::Growth,
    }
}

const fn description_of(kind: RatioKind) -> &'static str {
    match kind {
        RatioKind::PriceEarnings => "Share price over trailing earnings per share",
        RatioKind::PriceSales => "Market capitalisation over latest annual revenue",
        RatioKind::PriceBook => "Share price over book value per share",
        RatioKind::DividendYield => "Annual dividend per share over share price",
        RatioKind::Eps => "Trailing twelve-month earnings per share",
        RatioKind::RevenueGrowth => "Compound annual revenue growth over five fiscal years",
        RatioKind::ReturnOnEquity => "Net income over shareholder equity",
        RatioKind::DebtRatio => "Total debt over total equity",
    }
}

/// Get all available ratio info, in reporting order
pub fn available_ratios() -> Vec<RatioInfo> {
    RatioCalculator::new()
        .ratios()
        .into_iter()
        .map(|ratio| {
            let kind = ratio.kind();
            RatioInfo {
                name: kind.name(),
                kind,
                category: category_of(kind),
                direction: kind.direction(),
                description: description_of(kind),
                required_fields: ratio.required_fields(),
            }
        })
        .collect()
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratio info by name
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    available_ratios().into_iter().find(|r| r.name == name)
}

/// Get a map of all ratios indexed by name
pub fn ratio_map() -> HashMap<&'static str, RatioInfo> {
    available_ratios()
        .into_iter()
        .map(|r| (r.name, r))
        .collect()
}

/// List all ratio names
pub fn list_ratio_names() -> Vec<&'static str> {
    available_ratios().into_iter().map(|r| r.name).collect()
}

/// Count ratios by category
pub fn count_by_category() -> HashMap<RatioCategory, usize> {
    let mut counts = HashMap::new();
    for ratio in available_ratios() {
        *counts.entry(ratio.category).or_insert(0) += 1;
    }
    counts
}
