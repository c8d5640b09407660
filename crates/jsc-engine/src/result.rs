//! # Result Model
//!
//! Terminal, immutable outcomes: one [`TestResult`] per executed test case,
//! grouped into [`SpecResult`]s per draft and a [`RunResult`] per `run()`
//! invocation. Pure data; the only derived predicate is
//! `passed = !failed && !errored`.

use std::sync::Arc;
use std::time::Duration;

use jsc_corpus::{Draft, TestCase, TestSuite};

/// Classification of one test-case execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The adapter's verdict matched the case's expectation.
    Pass,
    /// The adapter's verdict disagreed with the expectation. An ordinary
    /// outcome category, not a fault.
    Fail(String),
    /// The adapter faulted (or its preparation failed). Distinct from
    /// `Fail` so adapter bugs are never counted as conformance results.
    Error(String),
}

/// One executed test case, with back-references to its suite for the
/// `optional` flag and suite identity used in reporting.
#[derive(Debug, Clone)]
pub struct TestResult {
    suite: Arc<TestSuite>,
    case_index: usize,
    outcome: Outcome,
}

impl TestResult {
    pub fn new(suite: Arc<TestSuite>, case_index: usize, outcome: Outcome) -> Self {
        Self {
            suite,
            case_index,
            outcome,
        }
    }

    pub fn suite(&self) -> &Arc<TestSuite> {
        &self.suite
    }

    pub fn case(&self) -> &TestCase {
        &self.suite.tests()[self.case_index]
    }

    /// Inherited from the owning suite, never recomputed.
    pub fn optional(&self) -> bool {
        self.suite.optional()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Fail(_))
    }

    pub fn errored(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    pub fn passed(&self) -> bool {
        !self.failed() && !self.errored()
    }
}

/// All results for one draft, in execution order.
#[derive(Debug, Clone)]
pub struct SpecResult {
    draft: Draft,
    results: Vec<TestResult>,
}

impl SpecResult {
    pub fn new(draft: Draft, results: Vec<TestResult>) -> Self {
        Self { draft, results }
    }

    pub fn draft(&self) -> Draft {
        self.draft
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }
}

/// The outcome of one `run()` invocation. The duration covers only the run
/// phase; preparation cost is excluded by construction.
#[derive(Debug, Clone)]
pub struct RunResult {
    duration: Duration,
    specs: Vec<SpecResult>,
}

impl RunResult {
    pub fn new(duration: Duration, specs: Vec<SpecResult>) -> Self {
        Self { duration, specs }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn specs(&self) -> &[SpecResult] {
        &self.specs
    }

    /// Visit every result with its draft, in execution order.
    pub fn visit(&self, mut visitor: impl FnMut(Draft, &TestResult)) {
        for spec in &self.specs {
            for result in &spec.results {
                visitor(spec.draft, result);
            }
        }
    }

    /// Total number of results across all drafts.
    pub fn len(&self) -> usize {
        self.specs.iter().map(|s| s.results.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.iter().all(|s| s.results.is_empty())
    }
}
