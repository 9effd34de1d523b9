// Wire types for the openHAB `/rest/items` endpoint.
//
// Only the fields the tray needs are modelled; everything else in the
// item payload is ignored by serde.

use serde::Deserialize;

/// One element of the `GET /rest/items` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteItem {
    /// Item identifier (openHAB calls it `name`).
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,

    /// Metadata namespaces requested with `?metadata=`.
    #[serde(default)]
    pub metadata: Option<RemoteMetadata>,

    /// Tags attached to the item. `null` and a missing field both mean none.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// The metadata namespaces the tray reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteMetadata {
    #[serde(default)]
    pub quickhab_name: Option<MetadataValue>,
}

impl RemoteMetadata {
    /// Display-name override from the `quickhab_name` namespace.
    pub fn display_name(&self) -> Option<&str> {
        self.quickhab_name.as_ref().map(MetadataValue::as_str)
    }
}

/// A metadata namespace value.
///
/// openHAB returns `{"value": "...", "config": {...}}`; older setups and
/// hand-written fixtures use a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Plain(String),
    Entry { value: String },
}

impl MetadataValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Entry { value } => value,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_accepts_both_shapes() {
        let plain: RemoteItem = serde_json::from_value(json!({
            "name": "Light1",
            "metadata": { "quickhab_name": "Desk lamp" }
        }))
        .unwrap();
        let entry: RemoteItem = serde_json::from_value(json!({
            "name": "Light2",
            "metadata": { "quickhab_name": { "value": "Ceiling", "config": {} } }
        }))
        .unwrap();

        assert_eq!(plain.metadata.unwrap().display_name(), Some("Desk lamp"));
        assert_eq!(entry.metadata.unwrap().display_name(), Some("Ceiling"));
    }

    #[test]
    fn sparse_item_deserializes() {
        let item: RemoteItem = serde_json::from_value(json!({
            "type": "Switch",
            "tags": null,
            "state": "OFF"
        }))
        .unwrap();
        assert!(item.name.is_none());
        assert!(item.label.is_none());
        assert!(item.tags.is_none());
    }
}
