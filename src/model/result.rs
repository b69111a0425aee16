use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub id: usize,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub input_size: usize,
    pub filtered_size: usize,
    pub total_score: String,
    pub grouped_counts: BTreeMap<String, usize>,
    pub top_item: Option<TopItem>,
}

impl PipelineResult {
    pub fn grouped_total(&self) -> usize {
        self.grouped_counts.values().sum()
    }
}
