//! # Validator Adapter Contract
//!
//! Each third-party validator library is wrapped in one [`ValidatorAdapter`]
//! implementation. The contract is deliberately narrow: declare supported
//! drafts statically, compile a schema into a [`PreparedValidator`] once,
//! then validate instance text many times.
//!
//! ## Timing invariant
//!
//! `prepare` runs outside the timed phase; `validate` runs inside it.
//! Adapters must front-load all parsing and compilation into `prepare` and
//! must not perform network or disk I/O at validate-time — remote `$ref`
//! content comes from the shared [`RemoteSchemaStore`].

use std::sync::Arc;

use jsc_corpus::{Draft, RemoteSchemaStore, ResolveError};
use thiserror::Error;

/// A schema failed to compile for an implementation.
///
/// Captured by the harness, never propagated: the suite's cases all report
/// `Error` with this cause instead of aborting the comparison.
#[derive(Debug, Clone, Error)]
#[error("failed to build validator: {reason}")]
pub struct PrepareError {
    reason: String,
}

impl PrepareError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Verdict of a single validation call.
#[derive(Debug, Clone, Error)]
pub enum ValidateError {
    /// The instance does not conform to the schema. This is the ordinary,
    /// recoverable verdict for a negative test.
    #[error("{0}")]
    Invalid(String),

    /// The adapter hit an unexpected fault. Kept distinct from [`Invalid`]
    /// so implementation bugs are never mistaken for conformance failures.
    ///
    /// [`Invalid`]: ValidateError::Invalid
    #[error("validator fault: {0}")]
    Fault(String),
}

impl From<ResolveError> for ValidateError {
    fn from(err: ResolveError) -> Self {
        // Unresolvable refs are a validation-time problem the adapter may
        // recover from, so they surface as the recoverable verdict.
        ValidateError::Invalid(err.to_string())
    }
}

/// A compiled validator bound to one (implementation, draft, suite) triple.
///
/// Produced once, replayed many times; implementations must not re-parse
/// the schema per call.
pub trait PreparedValidator: Send + Sync {
    /// Validate canonical JSON instance text.
    fn validate(&self, instance: &str) -> Result<(), ValidateError>;
}

/// One wrapped validator implementation.
pub trait ValidatorAdapter: Send + Sync {
    /// Short alphanumeric name, used as the row key in reports.
    fn name(&self) -> &'static str;

    /// The drafts this implementation declares support for.
    fn supported(&self) -> &[Draft];

    fn supports(&self, draft: Draft) -> bool {
        self.supported().contains(&draft)
    }

    /// Compile `schema` into a reusable validator.
    ///
    /// `format_assertions` is set only for optional format suites; outside
    /// that carve-out format keywords are annotation-only, matching the
    /// spec's default-off format-assertion policy.
    fn prepare(
        &self,
        schema: &str,
        draft: Draft,
        remotes: Arc<RemoteSchemaStore>,
        format_assertions: bool,
    ) -> Result<Box<dyn PreparedValidator>, PrepareError>;
}
