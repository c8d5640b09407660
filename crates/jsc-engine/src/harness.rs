//! # Execution Harness
//!
//! Two-phase orchestration for one validator implementation:
//!
//! 1. **Prepare** (untimed): compile one validator per (draft, suite) pair
//!    passing the predicate and supported by the implementation. Compile
//!    failures are captured into a sentinel validator rather than thrown,
//!    so one bad schema degrades to per-case errors instead of aborting
//!    the comparison.
//! 2. **Run** (timed): re-filter the already-prepared drafts and replay
//!    every case, classifying each outcome. The same [`Runner`] can be run
//!    repeatedly under different draft filters without re-preparing, which
//!    is what keeps one-time compilation cost out of measured time.

use std::sync::Arc;
use std::time::Instant;

use jsc_corpus::{Corpus, Draft, TestCase, TestSuite};

use crate::adapter::{PreparedValidator, ValidateError, ValidatorAdapter};
use crate::result::{Outcome, RunResult, SpecResult, TestResult};

/// Selects which drafts, suites, and cases to prepare. All methods default
/// to accepting everything.
pub trait TestPredicate {
    fn draft(&self, _draft: Draft) -> bool {
        true
    }

    fn suite(&self, _suite: &TestSuite) -> bool {
        true
    }

    fn case(&self, _case: &TestCase) -> bool {
        true
    }
}

/// Accepts every draft, suite, and case.
pub struct AllTests;

impl TestPredicate for AllTests {}

/// Owns the corpus and prepares runners against it.
pub struct Harness {
    corpus: Corpus,
}

impl Harness {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Prepare phase: build one compiled validator per selected
    /// (draft, suite) pair. Excluded from run timing.
    pub fn prepare(
        &self,
        adapter: &dyn ValidatorAdapter,
        predicate: &dyn TestPredicate,
    ) -> Runner {
        let specs = self
            .corpus
            .specs()
            .iter()
            .filter(|spec| predicate.draft(spec.draft()) && adapter.supports(spec.draft()))
            .map(|spec| PreparedSpec {
                draft: spec.draft(),
                suites: spec
                    .suites()
                    .iter()
                    .filter(|suite| predicate.suite(suite))
                    .map(|suite| self.prepare_suite(adapter, spec.draft(), suite, predicate))
                    .collect(),
            })
            .collect();

        Runner { specs }
    }

    fn prepare_suite(
        &self,
        adapter: &dyn ValidatorAdapter,
        draft: Draft,
        suite: &Arc<TestSuite>,
        predicate: &dyn TestPredicate,
    ) -> PreparedSuite {
        // Format assertions are on only for optional format suites; the
        // spec's carve-out for everything else is assertion-off.
        let format_assertions = suite.optional() && suite.in_format_dir();

        let validator = match adapter.prepare(
            suite.schema(),
            draft,
            Arc::clone(self.corpus.remotes()),
            format_assertions,
        ) {
            Ok(validator) => validator,
            Err(err) => {
                tracing::debug!(
                    draft = %draft,
                    suite = %suite.source_path().display(),
                    cause = %err,
                    "preparation failed; suite will report errors"
                );
                Box::new(FailedPreparation {
                    cause: err.to_string(),
                })
            }
        };

        let cases = suite
            .tests()
            .iter()
            .enumerate()
            .filter(|(_, case)| predicate.case(case))
            .map(|(idx, _)| idx)
            .collect();

        PreparedSuite {
            suite: Arc::clone(suite),
            validator,
            cases,
        }
    }
}

/// Sentinel for a failed preparation: every validation reports the same
/// captured cause as a fault, so each case classifies as `Error`.
struct FailedPreparation {
    cause: String,
}

impl PreparedValidator for FailedPreparation {
    fn validate(&self, _instance: &str) -> Result<(), ValidateError> {
        Err(ValidateError::Fault(self.cause.clone()))
    }
}

struct PreparedSuite {
    suite: Arc<TestSuite>,
    validator: Box<dyn PreparedValidator>,
    cases: Vec<usize>,
}

struct PreparedSpec {
    draft: Draft,
    suites: Vec<PreparedSuite>,
}

/// Prepared, immutable validator state for one implementation. Replayable
/// any number of times; runs are deterministic in prepared order.
pub struct Runner {
    specs: Vec<PreparedSpec>,
}

impl Runner {
    /// Run phase: replay every prepared case for drafts passing the filter.
    /// Only this phase is timed.
    pub fn run(&self, draft_filter: impl Fn(Draft) -> bool) -> RunResult {
        let start = Instant::now();

        let specs = self
            .specs
            .iter()
            .filter(|spec| draft_filter(spec.draft))
            .map(|spec| {
                let results = spec
                    .suites
                    .iter()
                    .flat_map(|prepared| {
                        prepared.cases.iter().map(|&idx| {
                            let case = &prepared.suite.tests()[idx];
                            let outcome = classify(
                                prepared.validator.validate(case.data()),
                                case.valid(),
                            );
                            TestResult::new(Arc::clone(&prepared.suite), idx, outcome)
                        })
                    })
                    .collect();
                SpecResult::new(spec.draft, results)
            })
            .collect();

        RunResult::new(start.elapsed(), specs)
    }

    /// Drafts this runner has prepared validators for.
    pub fn prepared_drafts(&self) -> impl Iterator<Item = Draft> + '_ {
        self.specs.iter().map(|s| s.draft)
    }
}

fn classify(verdict: Result<(), ValidateError>, expect_valid: bool) -> Outcome {
    match verdict {
        Ok(()) if expect_valid => Outcome::Pass,
        Ok(()) => Outcome::Fail("passed when it should have failed".to_string()),
        Err(ValidateError::Invalid(_)) if !expect_valid => Outcome::Pass,
        Err(ValidateError::Invalid(message)) => Outcome::Fail(message),
        Err(ValidateError::Fault(cause)) => Outcome::Error(cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_agreement_is_pass() {
        assert_eq!(classify(Ok(()), true), Outcome::Pass);
        assert_eq!(
            classify(Err(ValidateError::Invalid("no".into())), false),
            Outcome::Pass
        );
    }

    #[test]
    fn test_classify_mismatch_is_fail() {
        assert_eq!(
            classify(Ok(()), false),
            Outcome::Fail("passed when it should have failed".into())
        );
        assert_eq!(
            classify(Err(ValidateError::Invalid("no".into())), true),
            Outcome::Fail("no".into())
        );
    }

    #[test]
    fn test_classify_fault_is_error_regardless_of_expectation() {
        assert_eq!(
            classify(Err(ValidateError::Fault("boom".into())), true),
            Outcome::Error("boom".into())
        );
        assert_eq!(
            classify(Err(ValidateError::Fault("boom".into())), false),
            Outcome::Error("boom".into())
        );
    }
}
