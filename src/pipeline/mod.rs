pub mod stage1_generate;
pub mod stage2_filter;
pub mod stage3_sort;
pub mod stage4_aggregate;
pub mod stage5_summary;

use crate::model::PipelineResult;
use crate::rng::{UniformSource, select_source};

use stage1_generate::generate_items;
use stage2_filter::filter_and_score;
use stage3_sort::sort_by_score_desc;
use stage4_aggregate::aggregate;
use stage5_summary::build_result;

pub fn run(size: usize, seed: Option<i64>) -> PipelineResult {
    let mut source = select_source(seed);
    run_with_source(size, source.as_mut())
}

pub fn run_with_source(size: usize, source: &mut dyn UniformSource) -> PipelineResult {
    tracing::trace!(size, source = source.source_name(), "generating items");
    let items = generate_items(size, source);
    let mut scored = filter_and_score(items);
    sort_by_score_desc(&mut scored);
    let aggregates = aggregate(&scored);
    build_result(size, &scored, &aggregates)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
