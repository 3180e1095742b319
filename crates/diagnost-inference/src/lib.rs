//! diagnost-inference
//!
//! Summarization model invocation with bounded fixed-delay retry.

pub mod client;
pub mod error;
pub mod prompt;
pub mod service;
pub mod sleep;
