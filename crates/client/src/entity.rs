//! Entity contract for table records.

use serde::Serialize;

/// A JSON-serializable record stored in a table, identified by its `id`
/// field.
///
/// Update reads [`entity_id`](EntityData::entity_id) to build the target
/// path segment; no other field is interpreted by the client.
pub trait EntityData: Serialize {
    /// Identifier of the record, as carried in its `id` field.
    fn entity_id(&self) -> &str;
}
