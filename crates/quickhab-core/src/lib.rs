//! Synchronization and menu-derivation engine for the QuickHAB tray.
//!
//! - **[`SyncController`]**: owns the single authoritative [`ItemStore`]
//!   and the active [`Settings`]. Every user-facing flow (refresh, toggle,
//!   action, settings edits, quit) runs as a background task and returns a
//!   [`FlowHandle`] the caller may await.
//!
//! - **[`ItemStore`]**: the last completed fetch plus the last fetch error,
//!   with stale-but-available semantics on failure.
//!
//! - **[`menu::build`]**: pure mapping from a store snapshot and settings
//!   to a toolkit-independent [`MenuDescription`].
//!
//! - **[`MenuSurface`] / [`UiContext`]**: the seam to whatever renders the
//!   menu. The controller marshals every render and dialog through the
//!   `UiContext` so the surface is only touched on its own thread.
//!
//! - **[`ConfigAccessor`]**: validated access to the two persisted values
//!   (server address, filter tag) over a pluggable [`PreferenceStore`].

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod menu;
pub mod model;
pub mod store;
pub mod ui;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConfigAccessor, MemoryPreferences, PreferenceStore, Settings};
pub use controller::{ControllerParts, FlowHandle, SyncController, SyncState};
pub use error::CoreError;
pub use menu::{MenuCommand, MenuDescription, MenuEntry, MenuInput};
pub use model::{Item, ItemId, TagSet};
pub use store::{ItemStore, StoreSnapshot, TagChange};
pub use ui::{ChannelUi, InlineUi, MenuSurface, Notice, NoticeLevel, Prompt, UiContext, UiQueue};

pub use quickhab_api::TransportConfig;
