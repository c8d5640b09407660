//! # Summary Report
//!
//! The ranked, weighted comparison across implementations: one row per
//! implementation, one column per draft anyone was measured against, plus
//! an Overall column scored from element-wise summed counts.

use std::collections::BTreeMap;
use std::time::Duration;

use jsc_corpus::Draft;
use jsc_engine::RunResult;

use crate::score::ScoreCounts;
use crate::table::{Cell, ReportError, Table};

const COL_IMPL: &str = "Implementations";
const COL_OVERALL: &str = "Overall";

/// The overall comparison table plus the total run-phase duration.
pub struct Summary {
    table: Table,
    duration: Duration,
}

impl Summary {
    /// Build the summary from per-implementation results, keyed by
    /// implementation name.
    pub fn new(results: &BTreeMap<String, RunResult>) -> Result<Summary, ReportError> {
        let duration = results.values().map(RunResult::duration).sum();

        let counts: BTreeMap<&str, PerImpl> = results
            .iter()
            .map(|(name, result)| (name.as_str(), PerImpl::tally(result)))
            .collect();

        // A draft column appears only if someone was measured against it.
        let draft_columns: Vec<Draft> = Draft::ALL
            .into_iter()
            .filter(|draft| {
                counts
                    .values()
                    .any(|c| c.per_draft.get(draft).is_some_and(|n| n.total() > 0))
            })
            .collect();

        let mut headers = vec![COL_IMPL.to_string(), COL_OVERALL.to_string()];
        headers.extend(draft_columns.iter().map(|d| d.token().to_string()));
        let mut table = Table::new(headers);

        // Rank by descending overall score; ties break on ascending name.
        let mut ranked: Vec<(&str, &PerImpl)> = counts.iter().map(|(n, c)| (*n, c)).collect();
        ranked.sort_by(|(name_a, a), (name_b, b)| {
            b.overall
                .score_tenths()
                .cmp(&a.overall.score_tenths())
                .then_with(|| name_a.cmp(name_b))
        });

        for (name, per_impl) in ranked {
            let mut cells = vec![Cell::text(name), counts_cell(&per_impl.overall)];
            for draft in &draft_columns {
                let draft_counts = per_impl.per_draft.get(draft).copied().unwrap_or_default();
                cells.push(counts_cell(&draft_counts));
            }
            table.add_row(cells)?;
        }

        Ok(Summary { table, duration })
    }

    /// Total run-phase duration across all implementations.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "{}\nTime: {}.{:03}s\n",
            self.table.to_markdown(),
            self.duration.as_secs(),
            self.duration.subsec_millis()
        )
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "durationMs": self.duration.as_millis() as u64,
            "implementations": self.table.to_json(),
        })
    }
}

struct PerImpl {
    per_draft: BTreeMap<Draft, ScoreCounts>,
    overall: ScoreCounts,
}

impl PerImpl {
    /// Pure fold over the run's results into per-draft buckets.
    fn tally(result: &RunResult) -> PerImpl {
        let mut per_draft: BTreeMap<Draft, ScoreCounts> = BTreeMap::new();
        result.visit(|draft, r| per_draft.entry(draft).or_default().record(r));
        let overall = per_draft
            .values()
            .copied()
            .fold(ScoreCounts::default(), ScoreCounts::combine);
        PerImpl { per_draft, overall }
    }
}

fn counts_cell(counts: &ScoreCounts) -> Cell {
    Cell::new(counts.cell_text(), counts.to_json())
}
