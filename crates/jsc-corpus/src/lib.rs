//! # jsc-corpus — Corpus Model and Loader
//!
//! Loads the official JSON-Schema-Test-Suite into immutable in-memory
//! value types and builds the [`RemoteSchemaStore`] that satisfies
//! cross-file `$ref` resolution without I/O during measured execution.
//!
//! ## Crate policy
//!
//! - All types are immutable after load; suites are shared via `Arc`.
//! - No `unsafe`; no `panic!()` or `.unwrap()` outside tests.
//! - All I/O happens here, at load time. Downstream crates never touch
//!   disk or network.

pub mod draft;
pub mod loader;
pub mod remotes;
pub mod suite;

pub use draft::Draft;
pub use loader::{Corpus, CorpusError, CorpusLoader};
pub use remotes::{MetaSchemaBank, RemoteSchemaStore, ResolveError, REMOTES_BASE_URI};
pub use suite::{SpecSuites, TestCase, TestSuite};
