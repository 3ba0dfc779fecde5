//! Migration from the legacy flat data file layout
//!
//! Early data files were a bare `{date: session}` map with no `plan`. Such a
//! file is recognized by the absence of a top-level `sessions` key and
//! reinterpreted wholesale as the session map.

use serde_json::Value;

use super::document::Document;

/// Whether a parsed data file still uses the legacy flat layout.
pub fn is_legacy(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| !obj.contains_key("sessions"))
}

/// Reinterpret a legacy flat `{date: session}` map as a current document.
///
/// Deterministic: the same input always yields the same document, and the
/// output shape is no longer recognized as legacy, so running the migration
/// on every load converges after the first.
pub fn migrate_legacy(value: Value) -> Result<Document, serde_json::Error> {
    let sessions = serde_json::from_value(value)?;
    Ok(Document {
        sessions,
        plan: None,
    })
}
