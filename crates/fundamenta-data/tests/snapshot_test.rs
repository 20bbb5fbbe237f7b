//! Integration tests for snapshot loading

use approx::assert_relative_eq;
use fundamenta_data::{RawFinancials, Snapshot};

#[test]
fn test_snapshot_file_roundtrip_through_disk() {
    let snapshot = Snapshot::new(vec![
        RawFinancials::builder("AAPL")
            .name("Apple Inc.")
            .sector("Technology")
            .price(180.0)
            .eps(6.0)
            .revenue(2022, 394.3)
            .revenue(2023, 383.3)
            .build(),
        RawFinancials::builder("KO").price(60.0).dividend_per_share(1.84).build(),
    ]);

    let path = std::env::temp_dir().join("fundamenta_snapshot_test.json");
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    let loaded = Snapshot::from_path(&path).unwrap();
    assert_eq!(loaded, snapshot);

    let apple = &loaded.companies[0];
    assert_eq!(apple.display_name(), "Apple Inc.");
    assert_relative_eq!(apple.latest_revenue().unwrap(), 383.3);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_partially_populated_records_are_accepted() {
    let json = r#"{
        "companies": [
            {"symbol": "A", "price": null, "eps": -1.5},
            {"symbol": "B", "revenue_history": [{"fiscal_year": 2023, "revenue": 0.0}]}
        ]
    }"#;

    let snapshot = Snapshot::from_json_str(json).unwrap();
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.companies[0].price().is_none());
    assert_eq!(snapshot.companies[0].eps(), Some(-1.5));
    assert_eq!(snapshot.companies[1].latest_revenue(), Some(0.0));
}
