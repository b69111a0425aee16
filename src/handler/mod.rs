pub mod bench;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::PipelineResult;
use crate::pipeline;

pub const DEFAULT_SIZE: i64 = 100_000;
pub const MAX_SIZE: usize = 500_000;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid request: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid size {size}: must be between 0 and {max}")]
    InvalidSize { size: i64, max: usize },
    #[error("invalid iterations: must be > 0")]
    InvalidIterations,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default)]
    pub seed: Option<i64>,
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

impl Default for Request {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(flatten)]
    pub result: PipelineResult,
    pub duration_ms: f64,
}

pub fn decode_request(event: &str) -> Result<Request, HandlerError> {
    Ok(serde_json::from_str(event)?)
}

/// Negative and oversized requests never reach the pipeline.
pub fn validate(request: &Request) -> Result<(usize, Option<i64>), HandlerError> {
    let size = usize::try_from(request.size)
        .ok()
        .filter(|&size| size <= MAX_SIZE)
        .ok_or(HandlerError::InvalidSize {
            size: request.size,
            max: MAX_SIZE,
        })?;
    Ok((size, request.seed))
}

pub fn handle_request(request: Request) -> Result<Response, HandlerError> {
    let (size, seed) = match validate(&request) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(size = request.size, "rejected request: {err}");
            return Err(err);
        }
    };

    let start = Instant::now();
    let result = pipeline::run(size, seed);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        size,
        seed = ?seed,
        filtered = result.filtered_size,
        duration_ms,
        "array ops complete"
    );

    Ok(Response {
        result,
        duration_ms,
    })
}

pub fn handle_event(event: &str) -> Result<Response, HandlerError> {
    let request = decode_request(event).inspect_err(|err| {
        tracing::warn!("rejected event: {err}");
    })?;
    handle_request(request)
}

#[cfg(test)]
#[path = "../../tests/src_inline/handler/mod.rs"]
mod tests;
