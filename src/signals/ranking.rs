//! Mover ranking by 1-day change

use std::cmp::Ordering;

use crate::models::metrics::MetricRecord;

fn by_change_desc(a: &MetricRecord, b: &MetricRecord) -> Ordering {
    b.change_1d_pct.total_cmp(&a.change_1d_pct)
}

/// Records sorted by 1-day change, largest first. Stable: ties keep input order.
pub fn rank(records: Vec<MetricRecord>) -> Vec<MetricRecord> {
    let mut ranked = records;
    ranked.sort_by(by_change_desc);
    ranked
}

/// The `count` largest movers of an already ranked list.
pub fn top_movers(ranked: &[MetricRecord], count: usize) -> Vec<MetricRecord> {
    ranked.iter().take(count).cloned().collect()
}

/// The `count` smallest movers of an already ranked list, smallest first.
///
/// Taken from the tail of the ranking so that with at least `2 * count`
/// records the bottom set never overlaps the top set; ties inside the tail
/// keep input order.
pub fn bottom_movers(ranked: &[MetricRecord], count: usize) -> Vec<MetricRecord> {
    let start = ranked.len().saturating_sub(count);
    let mut bottom: Vec<MetricRecord> = ranked[start..].to_vec();
    bottom.sort_by(|a, b| a.change_1d_pct.total_cmp(&b.change_1d_pct));
    bottom
}
