//! Relocation coordinator.
//!
//! Runs one logical unit of work: build the manifest, publish it, hand it
//! to the external load executor, then move every source object under the
//! done prefix. The steps are strictly sequential; each one completing is
//! the precondition for the next, and every failure is terminal for the
//! invocation. The caller owns any retry policy.
//!
//! Relocation is not transactional across entries. A failure mid-loop
//! leaves earlier entries relocated and later ones untouched, and a delete
//! failure after a successful copy leaves the object in both places. The
//! failure bias is duplication, never loss, and a whole-workflow re-run is
//! safe: relocated entries are recognized and skipped.

use tracing::{debug, info};

use crate::errors::{ManifestMoveError, RelocationPhase};
use crate::exec::LoadExecutor;
use crate::manifest::{build_manifest, publish_manifest, CommandGenerator, ListingRequest, Manifest, ManifestEntry, ManifestTemplate};
use crate::shutdown;
use crate::store::{ObjectLocator, ObjectStore};

/// Default key prefix relocated objects are moved under.
pub const DONE_PREFIX_DEFAULT: &str = "done/";

/// Inputs for one load-and-relocate run: what to enumerate, the entry
/// defaults, where the manifest goes, and where processed objects move.
pub struct LoadPlan<'a> {
    pub listing: ListingRequest,
    pub template: ManifestTemplate,
    pub command_generator: Option<&'a CommandGenerator<'a>>,
    pub destination: ObjectLocator,
    pub done_prefix: String,
}

/// Build, publish, trigger the load, then relocate every entry in manifest
/// order. Returns the manifest that was loaded.
///
/// An executor failure aborts before any copy or delete is issued: the
/// manifest stays published as the evidence needed to retry, and no source
/// object moves. An empty manifest still goes through the executor;
/// whether zero entries is acceptable is the load engine's call.
pub fn run_load_and_relocate(
    store: &dyn ObjectStore,
    executor: &dyn LoadExecutor,
    plan: &LoadPlan<'_>,
) -> Result<Manifest, ManifestMoveError> {
    let manifest = build_manifest(store, &plan.listing, &plan.template, plan.command_generator)?;
    let manifest_url = publish_manifest(store, &manifest, &plan.destination)?;

    info!(manifest = %manifest_url, entries = manifest.len(), "triggering bulk load");
    executor
        .execute(&manifest_url)
        .map_err(|e| ManifestMoveError::LoadExecution {
            manifest: manifest_url.clone(),
            source: e.into(),
        })?;

    info!(manifest = %manifest_url, "bulk load succeeded; relocating sources");
    relocate_entries(store, &manifest, &plan.done_prefix)?;

    info!(entries = manifest.len(), "run complete");
    Ok(manifest)
}

/// Move every manifest entry's source object under `done_prefix`,
/// strictly in manifest order, aborting on the first failure.
///
/// Safe to re-run over the same manifest: an entry whose source is gone
/// but whose done copy exists was relocated by an earlier attempt and is
/// skipped.
pub fn relocate_entries(
    store: &dyn ObjectStore,
    manifest: &Manifest,
    done_prefix: &str,
) -> Result<(), ManifestMoveError> {
    for entry in manifest.iter() {
        if shutdown::is_requested() {
            return Err(ManifestMoveError::Interrupted);
        }
        relocate_entry(store, entry, done_prefix)?;
    }
    Ok(())
}

fn relocate_entry(
    store: &dyn ObjectStore,
    entry: &ManifestEntry,
    done_prefix: &str,
) -> Result<(), ManifestMoveError> {
    let source = entry.source();
    let done = ObjectLocator::new(
        source.container.clone(),
        format!("{done_prefix}{}", source.key),
    );

    let copy_error = |source_err| ManifestMoveError::Relocation {
        locator: source.to_string(),
        phase: RelocationPhase::Copy,
        source: source_err,
    };

    if !store.exists(source).map_err(&copy_error)?
        && store.exists(&done).map_err(&copy_error)?
    {
        debug!(source = %source, done = %done, "already relocated; skipping");
        return Ok(());
    }

    store.copy(source, &done).map_err(&copy_error)?;

    // Delete only after the copy landed. If this fails the object exists in
    // both places: a duplicate, not a loss.
    store
        .delete(source)
        .map_err(|source_err| ManifestMoveError::Relocation {
            locator: source.to_string(),
            phase: RelocationPhase::Delete,
            source: source_err,
        })?;

    debug!(source = %source, done = %done, "relocated");
    Ok(())
}
