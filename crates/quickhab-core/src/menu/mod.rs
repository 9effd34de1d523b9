// ── Declarative menu ──
//
// Toolkit-independent description of the tray's context menu. Entries
// carry a `MenuCommand` value instead of a callback; the surface hands
// the command back to `SyncController::invoke` when an entry is clicked.

mod builder;

pub use builder::{FETCH_FAILED_LABEL, MenuInput, NO_ITEMS_LABEL, SETTINGS_LABEL, build};

use crate::model::ItemId;
use crate::ui::Notice;

/// What a menu entry does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Send `ON` to the item.
    ExecuteAction(ItemId),
    /// Add or remove the filter tag on the item.
    ToggleTag(ItemId),
    /// Show a dialog (fetch error, about box).
    ShowNotice(Notice),
    Refresh,
    /// Ask for a new server address.
    EditServer,
    /// Ask for a new filter tag.
    EditTag,
    Quit,
}

/// One entry of a [`MenuDescription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        label: String,
        on_invoke: MenuCommand,
    },
    Toggle {
        label: String,
        checked: bool,
        on_invoke: MenuCommand,
    },
    /// Informational text. Clickable only when it carries a command.
    StaticText {
        label: String,
        on_invoke: Option<MenuCommand>,
    },
    Separator,
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn action(label: impl Into<String>, on_invoke: MenuCommand) -> Self {
        Self::Action {
            label: label.into(),
            on_invoke,
        }
    }

    /// Disabled text.
    pub fn text(label: impl Into<String>) -> Self {
        Self::StaticText {
            label: label.into(),
            on_invoke: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. }
            | Self::Toggle { label, .. }
            | Self::StaticText { label, .. }
            | Self::Submenu { label, .. } => Some(label),
            Self::Separator => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Action { .. } | Self::Toggle { .. } | Self::Submenu { .. } => true,
            Self::StaticText { on_invoke, .. } => on_invoke.is_some(),
            Self::Separator => false,
        }
    }

    /// The command a click on this entry triggers, if any.
    pub fn command(&self) -> Option<&MenuCommand> {
        match self {
            Self::Action { on_invoke, .. } | Self::Toggle { on_invoke, .. } => Some(on_invoke),
            Self::StaticText { on_invoke, .. } => on_invoke.as_ref(),
            Self::Separator | Self::Submenu { .. } => None,
        }
    }
}

/// Ordered, pure-data description of the whole context menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDescription {
    pub entries: Vec<MenuEntry>,
}

impl MenuDescription {
    /// Find a top-level submenu by label.
    pub fn submenu(&self, label: &str) -> Option<&[MenuEntry]> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Submenu { label: l, entries } if l == label => Some(entries.as_slice()),
            _ => None,
        })
    }
}
