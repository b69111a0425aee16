use crate::model::ScoredItem;

// Unstable: equal scores come out in no particular order.
pub fn sort_by_score_desc(items: &mut [ScoredItem]) {
    items.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
}

pub fn is_sorted_desc(items: &[ScoredItem]) -> bool {
    items.windows(2).all(|w| w[0].score >= w[1].score)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_sort.rs"]
mod tests;
