//! # jsc-report — Scoring and Reporting
//!
//! Consumes aggregated run results across one or more implementations and
//! produces the ranked weighted summary and the per-suite breakdown, each
//! in two forms: a dense Markdown table for humans and a JSON document
//! carrying raw counts for downstream tooling.
//!
//! Scoring is a pure fold over [`jsc_engine::TestResult`]s into immutable
//! [`ScoreCounts`]; nothing here mutates shared state.

pub mod per_draft;
pub mod score;
pub mod summary;
pub mod table;

pub use per_draft::PerDraftSummary;
pub use score::{format_tenths, pct_tenths, ScoreCounts, REQUIRED_WEIGHT};
pub use summary::Summary;
pub use table::{Cell, ReportError, Table};
