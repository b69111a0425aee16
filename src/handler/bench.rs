use serde::Serialize;

use crate::handler::{HandlerError, Request, handle_request};
use crate::report::{mean, percentile, sorted_ascending};

pub const DEFAULT_WARMUP: u32 = 3;
pub const DEFAULT_ITERATIONS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchSummary {
    pub size: i64,
    pub warmup: u32,
    pub iterations: u32,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

fn invoke(size: i64, seed: u32) -> Result<f64, HandlerError> {
    let response = handle_request(Request {
        size,
        seed: Some(i64::from(seed)),
    })?;
    Ok(response.duration_ms)
}

/// Runs `warmup` untimed calls, then returns one `durationMs` per timed call.
/// Both phases use seeds counting up from 0.
pub fn collect_durations(
    size: i64,
    warmup: u32,
    iterations: u32,
) -> Result<Vec<f64>, HandlerError> {
    if iterations == 0 {
        return Err(HandlerError::InvalidIterations);
    }

    for i in 0..warmup {
        invoke(size, i)?;
    }
    tracing::debug!(size, warmup, "warmed up");

    let mut durations = Vec::with_capacity(iterations as usize);
    for i in 0..iterations {
        durations.push(invoke(size, i)?);
        if (i + 1) % 10 == 0 {
            tracing::debug!(size, done = i + 1, iterations, "bench progress");
        }
    }
    Ok(durations)
}

pub fn summarize(size: i64, warmup: u32, durations: &[f64]) -> BenchSummary {
    let sorted = sorted_ascending(durations);
    BenchSummary {
        size,
        warmup,
        iterations: durations.len() as u32,
        mean_ms: mean(durations),
        p50_ms: percentile(&sorted, 50.0),
        p95_ms: percentile(&sorted, 95.0),
        p99_ms: percentile(&sorted, 99.0),
    }
}

pub fn run_bench(size: i64, warmup: u32, iterations: u32) -> Result<BenchSummary, HandlerError> {
    let durations = collect_durations(size, warmup, iterations)?;
    let summary = summarize(size, warmup, &durations);
    tracing::info!(
        size,
        warmup,
        iterations,
        mean_ms = summary.mean_ms,
        p95_ms = summary.p95_ms,
        "bench complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/handler/bench.rs"]
mod tests;
