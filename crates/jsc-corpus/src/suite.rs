//! # Corpus Model
//!
//! Immutable value types for the loaded corpus: a [`TestCase`] (instance
//! document plus expected verdict), a [`TestSuite`] (one schema plus its
//! ordered cases), and [`SpecSuites`] (all suites for one draft).
//!
//! Schema and instance documents are stored as canonical compact JSON text,
//! produced by round-tripping the parsed `serde_json::Value` at load time.
//! Adapters therefore receive byte-for-byte identical input regardless of
//! the formatting of the corpus files.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::draft::Draft;

/// One test case: an instance document and the verdict a conforming
/// validator must reach for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    description: String,
    data: String,
    valid: bool,
    comment: Option<String>,
}

impl TestCase {
    pub fn new(
        description: impl Into<String>,
        data: &serde_json::Value,
        valid: bool,
        comment: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            data: compact_json(data),
            valid,
            comment,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical compact JSON text of the instance document.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Expected verdict: `true` if a conforming validator accepts the instance.
    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// A named collection of test cases sharing one schema.
///
/// `optional` is derived from the source path at construction: a suite is
/// optional iff its path passes through a directory literally named
/// `optional`. This includes `optional/format/...` nesting.
#[derive(Debug, Clone)]
pub struct TestSuite {
    description: String,
    schema: String,
    tests: Vec<TestCase>,
    comment: Option<String>,
    source_path: PathBuf,
    optional: bool,
}

impl TestSuite {
    pub fn new(
        description: impl Into<String>,
        schema: &serde_json::Value,
        tests: Vec<TestCase>,
        comment: Option<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        let source_path = source_path.into();
        let optional = path_has_component(&source_path, "optional");
        Self {
            description: description.into(),
            schema: compact_json(schema),
            tests,
            comment,
            source_path,
            optional,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical compact JSON text of the schema.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Test cases, in corpus order. Order is significant: re-running a
    /// prepared validator replays cases in exactly this order.
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The suite file this suite was loaded from; suite identity in reports.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// True iff the suite lives under an `optional` directory.
    pub fn optional(&self) -> bool {
        self.optional
    }

    /// True iff the suite file sits directly inside a `format` directory.
    pub fn in_format_dir(&self) -> bool {
        self.source_path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|n| n == "format")
    }
}

fn path_has_component(path: &Path, name: &str) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(s) if s == name))
}

fn compact_json(value: &serde_json::Value) -> String {
    // Compact serialization of an already-parsed Value cannot fail.
    value.to_string()
}

/// The ordered suites of one specification draft.
#[derive(Debug, Clone)]
pub struct SpecSuites {
    draft: Draft,
    suites: Vec<Arc<TestSuite>>,
}

impl SpecSuites {
    pub fn new(draft: Draft, suites: Vec<Arc<TestSuite>>) -> Self {
        Self { draft, suites }
    }

    pub fn draft(&self) -> Draft {
        self.draft
    }

    pub fn suites(&self) -> &[Arc<TestSuite>] {
        &self.suites
    }
}
