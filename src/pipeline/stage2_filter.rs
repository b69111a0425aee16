use crate::model::{Item, ScoredItem};

pub fn filter_and_score(items: Vec<Item>) -> Vec<ScoredItem> {
    items
        .into_iter()
        .filter(Item::passes_filter)
        .map(ScoredItem::from_item)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_filter.rs"]
mod tests;
