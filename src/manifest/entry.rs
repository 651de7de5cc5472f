//! Manifest value types: one load directive plus the aggregate manifest.

use serde::{Deserialize, Serialize};

use crate::store::ObjectLocator;

/// One load directive.
///
/// Wire shape, consumed by the downstream bulk-load engine and therefore
/// frozen: `url` is always present; `command`, `mandatory`, `publickey`
/// and `username` are omitted entirely when unset. Absence, not
/// null/false, is the wire representation of "not set".
///
/// The structured [`source`](Self::source) locator is the single source of
/// truth for where the object lives; `url` and the relocation key are both
/// derived from it, so the two can never disagree. It does not travel on
/// the wire, which means a deserialized manifest identifies objects by
/// `url` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Fully qualified `scheme://container/key` form of the source object.
    pub url: String,

    /// How to ingest this object; empty means the engine's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Whole load fails if this entry fails.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mandatory: bool,

    /// Public key identifier for access to the object.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "publickey")]
    pub public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip)]
    pub(crate) source: ObjectLocator,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl ManifestEntry {
    /// Structured source address this entry was built from.
    pub fn source(&self) -> &ObjectLocator {
        &self.source
    }
}

/// Insertion-ordered sequence of load directives.
///
/// Built fresh per invocation, never mutated after construction, and
/// serialized verbatim in entry order. An empty manifest serializes as
/// `{"entries":[]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestEntry> {
        self.entries.iter()
    }
}

/// Per-build defaults applied uniformly to every entry.
#[derive(Debug, Clone, Default)]
pub struct ManifestTemplate {
    pub mandatory: bool,
    pub public_key: Option<String>,
    pub username: Option<String>,
}
