//! diagnost-report
//!
//! Medical-history classification, rule-based report sections, and
//! assembly of the final report from model output and rule tables.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod history;
pub mod render;
pub mod sections;
