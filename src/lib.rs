//! Core library for `manifest_move`.
//!
//! Builds a load manifest describing the objects staged under a container
//! prefix, publishes it back to the store, hands the published locator to
//! an external bulk-load command, and finally relocates the loaded source
//! objects under a done prefix so a later run does not pick them up again.
//!
//! The workflow is strictly sequential and performs no internal retries:
//! every failure is surfaced to the caller with the container/key context
//! needed to diagnose and re-run. Relocation is not transactional across
//! entries. A mid-loop failure leaves earlier entries moved and later
//! ones untouched, and a delete failure after a successful copy leaves a
//! duplicate rather than a loss. Re-running the whole workflow is safe;
//! concurrent runs over overlapping prefixes are not coordinated and must
//! be avoided by the caller.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod relocate;
pub mod shutdown;
pub mod store;

pub use config::{Config, LogLevel};
pub use errors::{ManifestMoveError, RelocationPhase};
pub use exec::{LoadExecutor, ShellLoadExecutor, MANIFEST_PLACEHOLDER};
pub use manifest::{
    build_manifest, publish_manifest, CommandGenerator, ListingRequest, Manifest, ManifestEntry,
    ManifestTemplate,
};
pub use relocate::{relocate_entries, run_load_and_relocate, LoadPlan, DONE_PREFIX_DEFAULT};
pub use store::{
    FsStore, MemoryStore, ObjectInfo, ObjectLocator, ObjectStore, StoreError, KEY_SEPARATOR,
};
