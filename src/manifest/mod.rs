//! Manifest model, builder and publisher.

mod build;
mod entry;
mod publish;

pub use build::{build_manifest, ListingRequest};
pub use entry::{Manifest, ManifestEntry, ManifestTemplate};
pub use publish::publish_manifest;

use crate::store::ObjectInfo;

/// Derives a per-object ingest command from one listed descriptor.
///
/// Treated as a total, side-effect-free function: a panic here aborts the
/// whole build, and nothing observable to the builder may change.
pub type CommandGenerator<'a> = dyn Fn(&ObjectInfo) -> String + 'a;
