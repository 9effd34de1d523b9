// ── Domain model ──
//
// Canonical types the tray works with. Wire types from `quickhab-api`
// are converted into these in `convert.rs`.

pub mod item;

pub use item::{Item, ItemId, TagSet};
