//! # jsc-cli — Harness Command-Line Interface
//!
//! Subcommand handlers for the `jsc` binary. All load-time and report-time
//! I/O lives here; the engine crates stay I/O-free.

pub mod run;
