use crate::model::category::Category;

pub const FILTER_THRESHOLD: f64 = 0.3;
pub const SCORE_SCALE: f64 = 100.0;
pub const NORMALIZE_DIVISOR: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: usize,
    pub value: f64,
    // Built for every generated item; never reported.
    pub name: String,
    pub category: Category,
}

impl Item {
    pub fn new(id: usize, value: f64, category: Category) -> Self {
        Self {
            id,
            value,
            name: format!("item-{id}"),
            category,
        }
    }

    pub fn passes_filter(&self) -> bool {
        self.value > FILTER_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub item: Item,
    pub score: f64,
    pub normalized: f64,
}

impl ScoredItem {
    pub fn from_item(item: Item) -> Self {
        let score = item.value * SCORE_SCALE;
        let normalized = item.value / NORMALIZE_DIVISOR;
        Self {
            item,
            score,
            normalized,
        }
    }
}
