//! # Draft Registry
//!
//! One variant per JSON Schema specification draft the harness knows about.
//! Each draft carries static metadata: the directory name used by the
//! JSON-Schema-Test-Suite corpus, the canonical meta-schema URI, and the
//! URIs of the vocabulary documents the meta-schema `$ref`s into.
//!
//! Draft directories on disk that are not in this registry are skipped by
//! the loader, so the harness stays forward-compatible with corpus updates
//! that add drafts it does not yet know about.

use std::fmt;

/// A JSON Schema specification draft.
///
/// Variants are ordered oldest to newest; `Draft::ALL` and the derived `Ord`
/// follow that order, which is also the order drafts appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Draft {
    Draft3,
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    Draft202012,
}

const META_2019_09: &[&str] = &[
    "https://json-schema.org/draft/2019-09/meta/validation",
    "https://json-schema.org/draft/2019-09/meta/core",
    "https://json-schema.org/draft/2019-09/meta/applicator",
    "https://json-schema.org/draft/2019-09/meta/meta-data",
    "https://json-schema.org/draft/2019-09/meta/format",
    "https://json-schema.org/draft/2019-09/meta/content",
];

const META_2020_12: &[&str] = &[
    "https://json-schema.org/draft/2020-12/meta/validation",
    "https://json-schema.org/draft/2020-12/meta/core",
    "https://json-schema.org/draft/2020-12/meta/applicator",
    "https://json-schema.org/draft/2020-12/meta/meta-data",
    "https://json-schema.org/draft/2020-12/meta/content",
    "https://json-schema.org/draft/2020-12/meta/format-annotation",
    "https://json-schema.org/draft/2020-12/meta/unevaluated",
];

impl Draft {
    /// All known drafts, oldest first.
    pub const ALL: [Draft; 6] = [
        Draft::Draft3,
        Draft::Draft4,
        Draft::Draft6,
        Draft::Draft7,
        Draft::Draft201909,
        Draft::Draft202012,
    ];

    /// The corpus directory name for this draft, e.g. `"draft2020-12"`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Draft::Draft3 => "draft3",
            Draft::Draft4 => "draft4",
            Draft::Draft6 => "draft6",
            Draft::Draft7 => "draft7",
            Draft::Draft201909 => "draft2019-09",
            Draft::Draft202012 => "draft2020-12",
        }
    }

    /// The canonical meta-schema URI for this draft.
    pub fn uri(self) -> &'static str {
        match self {
            Draft::Draft3 => "http://json-schema.org/draft-03/schema#",
            Draft::Draft4 => "http://json-schema.org/draft-04/schema#",
            Draft::Draft6 => "http://json-schema.org/draft-06/schema#",
            Draft::Draft7 => "http://json-schema.org/draft-07/schema#",
            Draft::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Draft::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
        }
    }

    /// URIs of the vocabulary documents the draft's meta-schema depends on.
    ///
    /// Empty for drafts whose meta-schema is a single document.
    pub fn meta_schema_uris(self) -> &'static [&'static str] {
        match self {
            Draft::Draft201909 => META_2019_09,
            Draft::Draft202012 => META_2020_12,
            _ => &[],
        }
    }

    /// Stable token used in reports and on the command line, e.g. `DRAFT_07`.
    pub fn token(self) -> &'static str {
        match self {
            Draft::Draft3 => "DRAFT_03",
            Draft::Draft4 => "DRAFT_04",
            Draft::Draft6 => "DRAFT_06",
            Draft::Draft7 => "DRAFT_07",
            Draft::Draft201909 => "DRAFT_2019_09",
            Draft::Draft202012 => "DRAFT_2020_12",
        }
    }

    /// Look up a draft by corpus directory name.
    pub fn from_dir(dir_name: &str) -> Option<Draft> {
        Draft::ALL.into_iter().find(|d| d.dir_name() == dir_name)
    }

    /// Look up a draft by report token or directory name.
    pub fn parse(s: &str) -> Option<Draft> {
        Draft::ALL
            .into_iter()
            .find(|d| d.token() == s || d.dir_name() == s)
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
