//! # Per-Suite Breakdown
//!
//! Finer-grained report: for every (implementation, draft) pair, pass and
//! fail counts per originating suite file, keyed by the suite path relative
//! to the draft's directory. Rendered as one Markdown section per pair and
//! a nested JSON document.

use std::collections::BTreeMap;
use std::path::Path;

use jsc_corpus::Draft;
use jsc_engine::{RunResult, TestResult};

use crate::table::{Cell, ReportError, Table};

/// Per-suite pass/fail tallies for every (implementation, draft) pair.
pub struct PerDraftSummary {
    sections: Vec<Section>,
}

struct Section {
    implementation: String,
    draft: Draft,
    table: Table,
}

#[derive(Default, Clone, Copy)]
struct PassFail {
    pass: u64,
    fail: u64,
}

impl PassFail {
    fn record(&mut self, result: &TestResult) {
        if result.passed() {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
    }
}

impl PerDraftSummary {
    /// Build the breakdown from per-implementation results, keyed by
    /// implementation name. Sections are ordered by implementation name,
    /// then draft.
    pub fn new(results: &BTreeMap<String, RunResult>) -> Result<PerDraftSummary, ReportError> {
        let mut sections = Vec::new();

        for (name, result) in results {
            let mut by_draft: BTreeMap<Draft, BTreeMap<String, PassFail>> = BTreeMap::new();
            result.visit(|draft, r| {
                let key = suite_key(r.suite().source_path(), draft);
                by_draft
                    .entry(draft)
                    .or_default()
                    .entry(key)
                    .or_default()
                    .record(r);
            });

            for (draft, by_suite) in by_draft {
                let mut table = Table::new(["suite", "pass", "fail", "total"]);
                for (suite, counts) in by_suite {
                    table.add_row(vec![
                        Cell::text(suite),
                        Cell::from(counts.pass),
                        Cell::from(counts.fail),
                        Cell::from(counts.pass + counts.fail),
                    ])?;
                }
                sections.push(Section {
                    implementation: name.clone(),
                    draft,
                    table,
                });
            }
        }

        Ok(PerDraftSummary { sections })
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!(
                "## {}: {}\n{}\n",
                section.implementation,
                section.draft,
                section.table.to_markdown()
            ));
        }
        out
    }

    /// Nested JSON: implementation -> draft token -> suite rows.
    pub fn to_json(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for section in &self.sections {
            let by_draft = root
                .entry(section.implementation.clone())
                .or_insert_with(|| serde_json::Value::Object(Default::default()));
            if let Some(by_draft) = by_draft.as_object_mut() {
                by_draft.insert(section.draft.token().to_string(), section.table.to_json());
            }
        }
        root.into()
    }
}

/// The suite path relative to its draft directory; falls back to the full
/// path when the draft directory is not a path component.
fn suite_key(path: &Path, draft: Draft) -> String {
    let components: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let start = components
        .iter()
        .position(|c| c == draft.dir_name())
        .map(|idx| idx + 1)
        .unwrap_or(0);
    components[start..].join("/")
}
