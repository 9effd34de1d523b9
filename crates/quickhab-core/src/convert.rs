// ── API → domain conversion ──
//
// Maps `quickhab_api` wire types into canonical domain types.

use quickhab_api::RemoteItem;

use crate::model::{Item, ItemId, TagSet};

/// Id given to items the server returned without a `name`.
pub const UNNAMED_ITEM: &str = "UnnamedItem";

impl From<RemoteItem> for Item {
    fn from(remote: RemoteItem) -> Self {
        let id = non_blank(remote.name.as_deref()).unwrap_or(UNNAMED_ITEM);
        let id = ItemId::new(id);

        let display_name = remote
            .metadata
            .as_ref()
            .and_then(|m| non_blank(m.display_name()))
            .or_else(|| non_blank(remote.label.as_deref()))
            .unwrap_or(id.as_str())
            .to_owned();

        let tags: TagSet = remote.tags.unwrap_or_default().into_iter().collect();

        Self {
            id,
            display_name,
            tags,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn remote(value: serde_json::Value) -> RemoteItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn metadata_name_wins() {
        let item = Item::from(remote(json!({
            "name": "Light1",
            "label": "Desk Light",
            "metadata": { "quickhab_name": { "value": "Desk" } },
            "tags": ["QuickHAB"]
        })));
        assert_eq!(item.id.as_str(), "Light1");
        assert_eq!(item.display_name, "Desk");
        assert!(item.has_tag("QuickHAB"));
    }

    #[test]
    fn label_then_id_fallback() {
        let labelled = Item::from(remote(json!({ "name": "Light1", "label": "Desk Light" })));
        assert_eq!(labelled.display_name, "Desk Light");

        let bare = Item::from(remote(json!({ "name": "Light2", "label": "  " })));
        assert_eq!(bare.display_name, "Light2");
        assert!(bare.tags.is_empty());
    }

    #[test]
    fn missing_name_uses_placeholder() {
        let item = Item::from(remote(json!({ "label": "Mystery" })));
        assert_eq!(item.id.as_str(), UNNAMED_ITEM);
        assert_eq!(item.display_name, "Mystery");
    }

    #[test]
    fn duplicate_remote_tags_collapse() {
        let item = Item::from(remote(json!({
            "name": "Light1",
            "tags": ["QuickHAB", "QuickHAB", "Living"]
        })));
        assert_eq!(item.tags.len(), 2);
    }
}
