//! diagnost-core
//!
//! Pure domain types for symptom analysis: patient inputs, the condition
//! keyword table, history analysis, and the report wire shape.
//! No network or template dependency — this is the shared vocabulary of
//! the diagnost system.

pub mod error;
pub mod models;
