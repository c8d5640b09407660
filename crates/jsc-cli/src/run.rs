//! # Run Subcommand
//!
//! Loads a JSON-Schema-Test-Suite checkout, drives every registered
//! validator adapter through it, and writes the two report artifacts:
//! `report.md` (human) and `report.json` (machine).

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use jsc_corpus::{Corpus, Draft};
use jsc_engine::{AllTests, Harness, JsonschemaAdapter, ValidatorAdapter};
use jsc_report::{PerDraftSummary, Summary};

/// Arguments for the run subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the root of a JSON-Schema-Test-Suite checkout.
    pub corpus_root: PathBuf,

    /// Directory the report artifacts are written to.
    #[arg(long, default_value = "reports")]
    pub out_dir: PathBuf,

    /// Restrict the run to specific drafts (token or directory name,
    /// e.g. `DRAFT_07` or `draft7`). Repeatable; default is all drafts.
    #[arg(long = "draft")]
    pub drafts: Vec<String>,
}

/// All adapters the harness ships with.
fn adapters() -> Vec<Box<dyn ValidatorAdapter>> {
    vec![Box::new(JsonschemaAdapter)]
}

pub fn run(args: &RunArgs) -> anyhow::Result<()> {
    let draft_filter = parse_draft_filter(&args.drafts)?;

    let corpus = Corpus::load(&args.corpus_root)
        .with_context(|| format!("loading corpus from {}", args.corpus_root.display()))?;
    let total_suites: usize = corpus.specs().iter().map(|s| s.suites().len()).sum();
    tracing::info!(
        drafts = corpus.specs().len(),
        suites = total_suites,
        remotes = corpus.remotes().remote_count(),
        "corpus loaded"
    );

    let harness = Harness::new(corpus);
    let mut results = BTreeMap::new();
    for adapter in adapters() {
        let runner = harness.prepare(adapter.as_ref(), &AllTests);
        let result = runner.run(|draft| {
            draft_filter
                .as_ref()
                .map_or(true, |wanted| wanted.contains(&draft))
        });
        tracing::info!(
            implementation = adapter.name(),
            cases = result.len(),
            duration_ms = result.duration().as_millis() as u64,
            "run complete"
        );
        results.insert(adapter.name().to_string(), result);
    }

    let summary = Summary::new(&results)?;
    let per_draft = PerDraftSummary::new(&results)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let markdown = format!(
        "# Overall comparison\n\n{}\n# Specific Draft & Implementation results\n\n{}",
        summary.to_markdown(),
        per_draft.to_markdown()
    );
    let json = serde_json::json!({
        "summary": summary.to_json(),
        "perDraft": per_draft.to_json(),
    });

    let md_path = args.out_dir.join("report.md");
    let json_path = args.out_dir.join("report.json");
    std::fs::write(&md_path, markdown)
        .with_context(|| format!("writing {}", md_path.display()))?;
    std::fs::write(&json_path, serde_json::to_string_pretty(&json)?)
        .with_context(|| format!("writing {}", json_path.display()))?;

    tracing::info!(
        markdown = %md_path.display(),
        json = %json_path.display(),
        "reports written"
    );
    Ok(())
}

/// Print the draft registry.
pub fn list_drafts() {
    for draft in Draft::ALL {
        println!("{}\t{}\t{}", draft.token(), draft.dir_name(), draft.uri());
    }
}

fn parse_draft_filter(tokens: &[String]) -> anyhow::Result<Option<HashSet<Draft>>> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let mut wanted = HashSet::new();
    for token in tokens {
        let draft = Draft::parse(token)
            .with_context(|| format!("unknown draft: {token} (see `jsc list-drafts`)"))?;
        wanted.insert(draft);
    }
    Ok(Some(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draft_filter_accepts_tokens_and_dirs() {
        let filter = parse_draft_filter(&["DRAFT_07".into(), "draft2020-12".into()])
            .expect("parse")
            .expect("some");
        assert!(filter.contains(&Draft::Draft7));
        assert!(filter.contains(&Draft::Draft202012));
    }

    #[test]
    fn test_parse_draft_filter_empty_means_all() {
        assert!(parse_draft_filter(&[]).expect("parse").is_none());
    }

    #[test]
    fn test_parse_draft_filter_rejects_unknown() {
        assert!(parse_draft_filter(&["draft-99".into()]).is_err());
    }
}
