use std::collections::BTreeMap;

use crate::model::{Category, ScoredItem};

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub total_score: f64,
    pub grouped: BTreeMap<Category, usize>,
}

/// Sums in slice order, so callers pass the sorted slice to keep totals bit-stable.
pub fn aggregate(items: &[ScoredItem]) -> Aggregates {
    let mut total_score = 0.0f64;
    let mut grouped = BTreeMap::new();
    for scored in items {
        total_score += scored.score;
        *grouped.entry(scored.item.category).or_insert(0usize) += 1;
    }
    Aggregates {
        total_score,
        grouped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
