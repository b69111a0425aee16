//! `array-ops` library crate.
//!
//! The `array-ops` binary only parses arguments and prints; the pipeline and
//! the request handler live here so a serverless runtime can embed
//! [`handler::handle_event`] directly.

pub mod handler;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod rng;
