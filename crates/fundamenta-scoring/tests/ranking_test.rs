//! Integration tests for scoring and ranking

use approx::assert_relative_eq;
use fundamenta_ratios::{RatioKind, RatioSet};
use fundamenta_scoring::{
    MAX_SCORE, MIN_SCORE, RankedEntry, Ranker, RankingConfig, ScoredCompany, Scorer,
    ScoringConfig, Weights,
};
use rstest::rstest;

fn value_stock() -> RatioSet {
    RatioSet::empty()
        .with(RatioKind::PriceEarnings, 15.0)
        .with(RatioKind::PriceSales, 3.0)
        .with(RatioKind::PriceBook, 4.0)
        .with(RatioKind::DividendYield, 0.02)
        .with(RatioKind::Eps, 5.0)
        .with(RatioKind::RevenueGrowth, 0.10)
        .with(RatioKind::ReturnOnEquity, 0.20)
        .with(RatioKind::DebtRatio, 0.3)
}

/// Same company with negative earnings: P/E becomes undefined.
fn loss_making_stock() -> RatioSet {
    let mut ratios = value_stock().with(RatioKind::Eps, -2.0);
    ratios.pe_ratio = None;
    ratios
}

fn scored(scorer: &Scorer, symbol: &str, ratios: RatioSet) -> ScoredCompany {
    ScoredCompany {
        symbol: symbol.to_string(),
        name: format!("{symbol} Corp"),
        sector: "Industrials".to_string(),
        score: scorer.score(&ratios),
        ratios,
    }
}

fn pe_only_scorer() -> Scorer {
    Scorer::new(ScoringConfig {
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
    .unwrap()
}

#[test]
fn test_value_stock_sub_scores() {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let score = scorer.score(&value_stock());

    let expected = [8.0, 6.0, 4.0, 4.0, 8.0, 8.0, 8.0, 8.0];
    for (kind, want) in RatioKind::ALL.into_iter().zip(expected) {
        assert_relative_eq!(score.sub_score(kind), want);
    }
    assert_relative_eq!(score.composite, 6.8, epsilon = 1e-9);
    assert!(score.neutral_ratios().is_empty());
}

#[test]
fn test_negative_eps_shifts_only_pe_and_eps_terms() {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let a = scorer.score(&value_stock());
    let b = scorer.score(&loss_making_stock());

    assert!(b.get(RatioKind::PriceEarnings).neutral);
    assert_relative_eq!(b.sub_score(RatioKind::PriceEarnings), 5.0);
    for kind in RatioKind::ALL {
        if !matches!(kind, RatioKind::PriceEarnings | RatioKind::Eps) {
            assert_relative_eq!(a.sub_score(kind), b.sub_score(kind));
        }
    }

    let w = scorer.weights();
    let expected_delta = w.pe_ratio * (a.sub_score(RatioKind::PriceEarnings) - 5.0)
        + w.eps * (a.sub_score(RatioKind::Eps) - b.sub_score(RatioKind::Eps));
    assert_relative_eq!(a.composite - b.composite, expected_delta, epsilon = 1e-9);
}

#[test]
fn test_negative_eps_delta_is_exactly_the_pe_term_when_eps_unweighted() {
    let scorer = Scorer::new(ScoringConfig {
        weights: Weights {
            eps: 0.0,
            ..Weights::default()
        },
        ..ScoringConfig::default()
    })
    .unwrap();
    let a = scorer.score(&value_stock());
    let b = scorer.score(&loss_making_stock());

    let w_pe = scorer.weights().pe_ratio;
    assert_relative_eq!(
        a.composite - b.composite,
        w_pe * (a.sub_score(RatioKind::PriceEarnings) - 5.0),
        epsilon = 1e-9
    );
}

#[test]
fn test_three_of_ten_above_threshold() {
    let scorer = pe_only_scorer();
    // P/E 5 and 8 score 10, 12 scores 8; the rest score 6 or less.
    let pes = [18.0, 5.0, 40.0, 22.0, 12.0, 19.0, 28.0, 8.0, 35.0, 24.0];
    let companies: Vec<ScoredCompany> = pes
        .iter()
        .enumerate()
        .map(|(i, pe)| {
            scored(
                &scorer,
                &format!("S{i:02}"),
                RatioSet::empty().with(RatioKind::PriceEarnings, *pe),
            )
        })
        .collect();

    let ranker = Ranker::new(RankingConfig::default()).unwrap();
    let result = ranker.rank(companies);

    assert_eq!(result.len(), 10);
    assert_eq!(result.top_n().len(), 10);
    let eligible: Vec<&str> = result.eligible().into_iter().map(RankedEntry::symbol).collect();
    assert_eq!(eligible, vec!["S01", "S07", "S04"]);

    let composites: Vec<f64> = result.iter().map(RankedEntry::composite).collect();
    assert!(composites.windows(2).all(|w| w[0] >= w[1]));
    let ranks: Vec<usize> = result.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_min_score_filter_does_not_change_ranking() {
    let scorer = pe_only_scorer();
    let build = || {
        vec![
            scored(&scorer, "B", RatioSet::empty().with(RatioKind::PriceEarnings, 9.0)),
            scored(&scorer, "A", RatioSet::empty().with(RatioKind::PriceEarnings, 29.0)),
        ]
    };
    let strict = Ranker::new(RankingConfig::default().with_min_score(9.5))
        .unwrap()
        .rank(build());
    let lax = Ranker::new(RankingConfig::default().with_min_score(0.0))
        .unwrap()
        .rank(build());

    assert_eq!(strict.entries(), lax.entries());
    assert_eq!(strict.eligible().len(), 1);
    assert_eq!(lax.eligible().len(), 2);
}

#[test]
fn test_top_n_slices_ranking() {
    let scorer = pe_only_scorer();
    let companies: Vec<ScoredCompany> = (0..5)
        .map(|i| {
            scored(
                &scorer,
                &format!("T{i}"),
                RatioSet::empty().with(RatioKind::PriceEarnings, 10.0 + 5.0 * f64::from(i)),
            )
        })
        .collect();

    let result = Ranker::new(RankingConfig::default().with_top_n(2))
        .unwrap()
        .rank(companies);
    let top: Vec<&str> = result.top_n().iter().map(RankedEntry::symbol).collect();
    assert_eq!(top, vec!["T0", "T1"]);
    assert_eq!(result.top(50).len(), 5);
}

#[test]
fn test_ranking_is_deterministic_regardless_of_input_order() {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let companies = vec![
        scored(&scorer, "KO", value_stock()),
        scored(&scorer, "AAPL", value_stock()),
        scored(&scorer, "XOM", loss_making_stock()),
        scored(&scorer, "EMPTY", RatioSet::empty()),
    ];
    let mut reversed = companies.clone();
    reversed.reverse();

    let ranker = Ranker::default();
    let first = ranker.rank(companies);
    let second = ranker.rank(reversed);
    assert_eq!(first, second);

    let order: Vec<&str> = first.iter().map(RankedEntry::symbol).collect();
    assert_eq!(order, vec!["AAPL", "KO", "XOM", "EMPTY"]);
}

#[test]
fn test_all_missing_company_gets_neutral_composite() {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let result = Ranker::default().rank(vec![scored(&scorer, "NODATA", RatioSet::empty())]);
    assert_relative_eq!(result.entries()[0].composite(), 5.0, epsilon = 1e-12);
}

#[rstest]
#[case::extreme_cheap(0.01, 1e9, 100.0)]
#[case::extreme_expensive(1e9, -1e9, -100.0)]
#[case::zeroes(0.0, 0.0, 0.0)]
fn test_scores_stay_in_range(#[case] multiple: f64, #[case] eps: f64, #[case] growth: f64) {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let ratios = RatioSet::empty()
        .with(RatioKind::PriceEarnings, multiple)
        .with(RatioKind::PriceSales, multiple)
        .with(RatioKind::PriceBook, multiple)
        .with(RatioKind::DividendYield, growth)
        .with(RatioKind::Eps, eps)
        .with(RatioKind::RevenueGrowth, growth)
        .with(RatioKind::ReturnOnEquity, growth)
        .with(RatioKind::DebtRatio, multiple);
    let score = scorer.score(&ratios);

    for sub in &score.sub_scores {
        assert!((MIN_SCORE..=MAX_SCORE).contains(&sub.score));
    }
    assert!((MIN_SCORE..=MAX_SCORE).contains(&score.composite));
}
