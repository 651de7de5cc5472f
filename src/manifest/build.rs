//! Manifest builder: enumerate a prefix and project each object into an
//! entry.

use tracing::{debug, info};

use crate::errors::ManifestMoveError;
use crate::store::{ObjectLocator, ObjectStore, KEY_SEPARATOR};

use super::entry::{Manifest, ManifestEntry, ManifestTemplate};
use super::CommandGenerator;

/// Identifies the container and key prefix to enumerate.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub container: String,
    pub prefix: String,
}

impl ListingRequest {
    pub fn new(container: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            prefix: prefix.into(),
        }
    }
}

/// Build a manifest for every object under the requested prefix.
///
/// Entries come out in the store's listing order. Keys ending with the
/// separator are skipped as directory markers. That filter is a heuristic,
/// not a guarantee: stores that emit zero-byte marker objects without a
/// trailing separator are not filtered here. On listing failure no partial
/// manifest is returned.
pub fn build_manifest(
    store: &dyn ObjectStore,
    request: &ListingRequest,
    template: &ManifestTemplate,
    command_generator: Option<&CommandGenerator<'_>>,
) -> Result<Manifest, ManifestMoveError> {
    let listed = store
        .list(&request.container, &request.prefix)
        .map_err(|source| ManifestMoveError::Listing {
            container: request.container.clone(),
            source,
        })?;

    let mut entries = Vec::with_capacity(listed.len());
    for object in &listed {
        if object.key.ends_with(KEY_SEPARATOR) {
            debug!(key = %object.key, "skipping directory marker");
            continue;
        }

        let source = ObjectLocator::new(request.container.as_str(), object.key.as_str());
        let command = command_generator
            .map(|generate| generate(object))
            .filter(|c| !c.is_empty());

        debug!(key = %object.key, size = object.size, "adding manifest entry");
        entries.push(ManifestEntry {
            url: source.url(store.scheme()),
            command,
            mandatory: template.mandatory,
            public_key: template.public_key.clone(),
            username: template.username.clone(),
            source,
        });
    }

    info!(
        container = %request.container,
        prefix = %request.prefix,
        entries = entries.len(),
        "manifest built"
    );
    Ok(Manifest { entries })
}
