use crate::model::{PipelineResult, ScoredItem, TopItem};
use crate::pipeline::stage4_aggregate::Aggregates;
use crate::report::format_2dp;

pub fn build_result(
    input_size: usize,
    sorted: &[ScoredItem],
    aggregates: &Aggregates,
) -> PipelineResult {
    let grouped_counts = aggregates
        .grouped
        .iter()
        .map(|(category, count)| (category.label().to_string(), *count))
        .collect();

    let top_item = sorted.first().map(|top| TopItem {
        id: top.item.id,
        score: format_2dp(top.score),
    });

    PipelineResult {
        input_size,
        filtered_size: sorted.len(),
        total_score: format_2dp(aggregates.total_score),
        grouped_counts,
        top_item,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_summary.rs"]
mod tests;
