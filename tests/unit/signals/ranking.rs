//! Unit tests for mover ranking

use market_digest::models::MetricRecord;
use market_digest::signals::{bottom_movers, rank, top_movers};

fn record(symbol: &str, change: f64) -> MetricRecord {
    MetricRecord {
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        last_price: 1.0,
        change_1d_pct: change,
        change_5d_pct: 0.0,
        from_high_pct: -10.0,
        from_low_pct: 10.0,
        rsi14: Some(50.0),
        signals: Vec::new(),
    }
}

fn symbols(records: &[MetricRecord]) -> Vec<&str> {
    records.iter().map(|r| r.symbol.as_str()).collect()
}

#[test]
fn test_rank_descending() {
    let ranked = rank(vec![record("A", 1.0), record("B", 3.0), record("C", -2.0)]);
    assert_eq!(symbols(&ranked), vec!["B", "A", "C"]);
}

#[test]
fn test_rank_stable_on_ties() {
    let ranked = rank(vec![
        record("A", 1.0),
        record("B", 2.0),
        record("C", 1.0),
        record("D", 1.0),
    ]);
    assert_eq!(symbols(&ranked), vec!["B", "A", "C", "D"]);
}

#[test]
fn test_top_and_bottom_movers() {
    let records: Vec<MetricRecord> = (0..12)
        .map(|i| record(&format!("S{:02}", i), i as f64 - 6.0))
        .collect();
    let ranked = rank(records);

    let top = top_movers(&ranked, 5);
    let bottom = bottom_movers(&ranked, 5);
    assert_eq!(symbols(&top), vec!["S11", "S10", "S09", "S08", "S07"]);
    assert_eq!(symbols(&bottom), vec!["S00", "S01", "S02", "S03", "S04"]);
}

#[test]
fn test_top_and_bottom_disjoint_with_ties() {
    let records: Vec<MetricRecord> = (0..10).map(|i| record(&format!("S{}", i), 0.0)).collect();
    let ranked = rank(records);

    let top = top_movers(&ranked, 5);
    let bottom = bottom_movers(&ranked, 5);
    assert_eq!(symbols(&top), vec!["S0", "S1", "S2", "S3", "S4"]);
    assert_eq!(symbols(&bottom), vec!["S5", "S6", "S7", "S8", "S9"]);
    assert!(top.iter().all(|t| bottom.iter().all(|b| b.symbol != t.symbol)));
}

#[test]
fn test_movers_with_few_records() {
    let ranked = rank(vec![record("A", 1.0), record("B", -1.0)]);
    assert_eq!(top_movers(&ranked, 5).len(), 2);
    assert_eq!(symbols(&bottom_movers(&ranked, 5)), vec!["B", "A"]);
}
