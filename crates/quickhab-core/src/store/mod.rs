// ── Item storage ──
//
// The single authoritative copy of fetched items lives in an `ItemStore`
// owned by the `SyncController`. Readers get cheap `Arc` snapshots.

mod item_store;

pub use item_store::{ItemStore, StoreSnapshot, TagChange, filter_by_tag};
