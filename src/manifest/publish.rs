//! Manifest publisher: serialize and store at a destination locator.

use tracing::info;

use crate::errors::ManifestMoveError;
use crate::store::{ObjectLocator, ObjectStore};

use super::entry::Manifest;

/// Serialize the manifest and write it as one object at `destination`,
/// overwriting whatever is there. Returns the published URL for the load
/// step. The store receives the byte length implicitly and the sniffed
/// content type explicitly, to keep alongside the payload.
pub fn publish_manifest(
    store: &dyn ObjectStore,
    manifest: &Manifest,
    destination: &ObjectLocator,
) -> Result<String, ManifestMoveError> {
    let body =
        serde_json::to_vec(manifest).map_err(|source| ManifestMoveError::Serialization {
            destination: destination.to_string(),
            source,
        })?;

    let content_type = sniff_content_type(&body);
    store
        .put(destination, &body, content_type)
        .map_err(|source| ManifestMoveError::StorageWrite {
            destination: destination.to_string(),
            source,
        })?;

    let url = destination.url(store.scheme());
    info!(
        destination = %url,
        bytes = body.len(),
        content_type,
        "manifest published"
    );
    Ok(url)
}

/// Best-effort content type sniffed from the serialized bytes.
fn sniff_content_type(body: &[u8]) -> &'static str {
    let first = body.iter().find(|b| !b.is_ascii_whitespace());
    match first {
        Some(b'{') | Some(b'[') => "application/json",
        _ if std::str::from_utf8(body).is_ok() => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_json_from_leading_brace() {
        assert_eq!(sniff_content_type(b"{\"entries\":[]}"), "application/json");
        assert_eq!(sniff_content_type(b"  [1,2]"), "application/json");
    }

    #[test]
    fn sniffs_text_and_binary_fallbacks() {
        assert_eq!(sniff_content_type(b"hello"), "text/plain; charset=utf-8");
        assert_eq!(sniff_content_type(&[0xff, 0xfe, 0x00]), "application/octet-stream");
    }
}
