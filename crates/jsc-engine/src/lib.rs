//! # jsc-engine — Two-Phase Execution Engine
//!
//! Drives a pluggable validator implementation through every corpus test
//! case. Preparation (schema compilation) is split from execution (case
//! replay) so that the timed run phase carries no one-time cost and the
//! same prepared state can be re-measured under different draft filters.
//!
//! ## Crate policy
//!
//! - No I/O anywhere in this crate: schemas, instances, and remote content
//!   are all in-memory by the time the engine sees them.
//! - Per-case faults are recorded as data ([`Outcome::Error`]), never
//!   propagated out of `run`.
//! - Everything is `Send + Sync`; prepared state is immutable and can be
//!   sharded across threads by callers.

pub mod adapter;
pub mod harness;
pub mod jsonschema_adapter;
pub mod result;

pub use adapter::{PreparedValidator, PrepareError, ValidateError, ValidatorAdapter};
pub use harness::{AllTests, Harness, Runner, TestPredicate};
pub use jsonschema_adapter::JsonschemaAdapter;
pub use result::{Outcome, RunResult, SpecResult, TestResult};
