//! Gripe model.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The canonical gripe collection, keyed by generated ID.
///
/// Persisted as a JSON object `{ "<id>": "<text>" }`.
pub type Gripes = BTreeMap<String, String>;

/// Form body for the admin "add gripe" operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddGripeForm {
    #[serde(default)]
    pub gripe: String,
}
