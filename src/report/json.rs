use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("JSON render error: {0}")]
pub struct ReportError(#[from] serde_json::Error);

pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ReportError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
