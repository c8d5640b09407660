//! # Corpus Loader
//!
//! Walks a JSON-Schema-Test-Suite checkout and materializes the whole
//! corpus up front: every suite file under `tests/<draft>/`, plus the
//! `remotes/` directory as the [`RemoteSchemaStore`].
//!
//! ## Ordering
//!
//! Suites load in a fixed, documented order so reports are reproducible
//! across filesystems: regular files of a directory sorted by file name,
//! then the `optional/` child, then the `format/` child, recursively.
//! Disk-iteration order is never relied on.
//!
//! ## Failure policy
//!
//! Loading is fail-fast: a missing root or marker file, or a single
//! malformed suite file, aborts the whole load. No partial corpus is ever
//! returned.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::draft::Draft;
use crate::remotes::{MetaSchemaBank, RemoteSchemaStore, REMOTES_BASE_URI};
use crate::suite::{SpecSuites, TestCase, TestSuite};

/// File that marks a directory as a JSON-Schema-Test-Suite checkout.
const MARKER_FILE: &str = "test-schema.json";

/// Fatal load-time errors. None of these are retryable.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus root does not exist: {0}")]
    NotFound(PathBuf),

    #[error("corpus root does not contain test suites (no {MARKER_FILE}): {0}")]
    NotACorpus(PathBuf),

    #[error("failed to parse test suite: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk shape of a suite file entry. Schema and instance documents stay
/// raw `Value`s here and are canonicalized into the model types.
#[derive(Debug, Deserialize)]
struct RawSuite {
    description: String,
    schema: serde_json::Value,
    tests: Vec<RawCase>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCase {
    description: String,
    data: serde_json::Value,
    valid: bool,
    comment: Option<String>,
}

/// The fully loaded corpus: per-draft suites plus the remote schema store.
#[derive(Debug)]
pub struct Corpus {
    specs: Vec<SpecSuites>,
    remotes: Arc<RemoteSchemaStore>,
}

impl Corpus {
    /// Load a corpus with default settings: all suite files, empty
    /// meta-schema bank.
    pub fn load(root: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
        CorpusLoader::new().load(root)
    }

    /// Per-draft suites, in [`Draft::ALL`] order.
    pub fn specs(&self) -> &[SpecSuites] {
        &self.specs
    }

    /// The shared, read-only remote schema store.
    pub fn remotes(&self) -> &Arc<RemoteSchemaStore> {
        &self.remotes
    }

    /// Assemble a corpus from already-built parts. Intended for callers
    /// that synthesize suites in memory rather than loading from disk.
    pub fn from_parts(specs: Vec<SpecSuites>, remotes: RemoteSchemaStore) -> Corpus {
        Corpus {
            specs,
            remotes: Arc::new(remotes),
        }
    }
}

/// Configurable loader. The file filter decides which suite files load
/// (useful for running a slice of the corpus); the meta-schema bank supplies
/// draft meta-schema content to the store.
pub struct CorpusLoader {
    file_filter: Box<dyn Fn(&Path) -> bool + Send + Sync>,
    meta: MetaSchemaBank,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoader {
    pub fn new() -> Self {
        Self {
            file_filter: Box::new(|_| true),
            meta: MetaSchemaBank::empty(),
        }
    }

    /// Only load suite files whose path satisfies the predicate.
    pub fn with_file_filter(
        mut self,
        filter: impl Fn(&Path) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.file_filter = Box::new(filter);
        self
    }

    /// Supply materialized meta-schema content for the store.
    pub fn with_meta_schemas(mut self, bank: MetaSchemaBank) -> Self {
        self.meta = bank;
        self
    }

    /// Load the corpus rooted at `root`.
    pub fn load(self, root: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(CorpusError::NotFound(root.to_path_buf()));
        }
        if !root.join(MARKER_FILE).exists() {
            return Err(CorpusError::NotACorpus(root.to_path_buf()));
        }

        let remotes = load_remotes(&root.join("remotes"))?;
        tracing::debug!(remotes = remotes.len(), "loaded remote schemas");

        let tests_dir = root.join("tests");
        let mut specs = Vec::new();
        for draft in Draft::ALL {
            let draft_dir = tests_dir.join(draft.dir_name());
            if !draft_dir.is_dir() {
                continue;
            }
            let suites = self.load_spec_dir(&draft_dir)?;
            tracing::debug!(draft = %draft, suites = suites.len(), "loaded draft suites");
            specs.push(SpecSuites::new(draft, suites));
        }

        Ok(Corpus {
            specs,
            remotes: Arc::new(RemoteSchemaStore::new(remotes, self.meta)),
        })
    }

    /// Load all suites in a draft (or nested special) directory: regular
    /// files name-sorted, then `optional/`, then `format/`. The guards stop
    /// a directory from recursing into itself under its own name.
    fn load_spec_dir(&self, dir: &Path) -> Result<Vec<Arc<TestSuite>>, CorpusError> {
        let mut suites = Vec::new();

        for file in sorted_json_files(dir)? {
            if !(self.file_filter)(&file) {
                continue;
            }
            suites.extend(load_suite_file(&file)?);
        }

        for special in ["optional", "format"] {
            let child = dir.join(special);
            if !dir.ends_with(special) && child.is_dir() {
                suites.extend(self.load_spec_dir(&child)?);
            }
        }

        Ok(suites)
    }
}

/// Regular `*.json` files directly in `dir`, sorted by file name.
fn sorted_json_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_suite_file(path: &Path) -> Result<Vec<Arc<TestSuite>>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: Vec<RawSuite> =
        serde_json::from_str(&content).map_err(|source| CorpusError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .map(|suite| {
            let tests = suite
                .tests
                .into_iter()
                .map(|case| TestCase::new(case.description, &case.data, case.valid, case.comment))
                .collect();
            Arc::new(TestSuite::new(
                suite.description,
                &suite.schema,
                tests,
                suite.comment,
                path,
            ))
        })
        .collect())
}

/// Walk the `remotes/` directory and key every `.json` file by its synthetic
/// `http://localhost:1234/<relative-path>` URI with `/` separators.
///
/// A missing directory yields an empty map so trimmed corpora stay loadable.
fn load_remotes(remotes_dir: &Path) -> Result<HashMap<String, String>, CorpusError> {
    let mut remotes = HashMap::new();
    if !remotes_dir.is_dir() {
        tracing::debug!(dir = %remotes_dir.display(), "no remotes directory");
        return Ok(remotes);
    }
    walk_remotes(remotes_dir, remotes_dir, &mut remotes)?;
    Ok(remotes)
}

fn walk_remotes(
    base: &Path,
    dir: &Path,
    out: &mut HashMap<String, String>,
) -> Result<(), CorpusError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_remotes(base, &path, out)?;
        } else if path.extension().is_some_and(|e| e == "json") {
            let content = std::fs::read_to_string(&path).map_err(|source| CorpusError::Io {
                path: path.clone(),
                source,
            })?;
            let relative = path
                .strip_prefix(base)
                .unwrap_or(&path)
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.insert(format!("{REMOTES_BASE_URI}{relative}"), content);
        }
    }
    Ok(())
}
