// ── Menu derivation ──
//
// Pure function from (items, filter tag, server, last error, version) to
// a `MenuDescription`. No I/O, no clock, no hidden state: identical input
// yields an identical menu.

use super::{MenuCommand, MenuDescription, MenuEntry};
use crate::model::Item;
use crate::store::filter_by_tag;
use crate::ui::Notice;

pub const NO_ITEMS_LABEL: &str = "No Items found";
pub const FETCH_FAILED_LABEL: &str = "Unable to fetch Items";
pub const SETTINGS_LABEL: &str = "Settings";

/// Everything the menu depends on.
#[derive(Debug, Clone, Copy)]
pub struct MenuInput<'a> {
    /// Full, unfiltered item collection in fetch order.
    pub items: &'a [Item],
    pub query_tag: &'a str,
    pub server: &'a str,
    /// Last fetch error; empty when the last fetch succeeded.
    pub last_error: &'a str,
    pub app_version: &'a str,
}

/// Derive the tray menu.
pub fn build(input: &MenuInput<'_>) -> MenuDescription {
    let mut entries: Vec<MenuEntry> = filter_by_tag(input.items, input.query_tag)
        .map(|item| {
            MenuEntry::action(
                item.display_name.clone(),
                MenuCommand::ExecuteAction(item.id.clone()),
            )
        })
        .collect();

    if entries.is_empty() {
        entries.push(empty_slot(input.last_error));
    }

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action("Refresh", MenuCommand::Refresh));
    entries.push(MenuEntry::Submenu {
        label: SETTINGS_LABEL.into(),
        entries: settings_entries(input),
    });
    entries.push(MenuEntry::action(
        "About",
        MenuCommand::ShowNotice(about_notice(input.query_tag, input.app_version)),
    ));
    entries.push(MenuEntry::action("Quit", MenuCommand::Quit));

    MenuDescription { entries }
}

/// Placeholder shown when no item carries the filter tag.
fn empty_slot(last_error: &str) -> MenuEntry {
    if last_error.trim().is_empty() {
        return MenuEntry::text(NO_ITEMS_LABEL);
    }

    MenuEntry::StaticText {
        label: FETCH_FAILED_LABEL.into(),
        on_invoke: Some(MenuCommand::ShowNotice(Notice::warning(
            FETCH_FAILED_LABEL,
            last_error,
        ))),
    }
}

fn settings_entries(input: &MenuInput<'_>) -> Vec<MenuEntry> {
    let mut entries = vec![
        MenuEntry::action(format!("Server: {}", input.server), MenuCommand::EditServer),
        MenuEntry::action(format!("Tag: {}", input.query_tag), MenuCommand::EditTag),
    ];

    if input.items.is_empty() {
        return entries;
    }

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::text(format!(
        "Items with the '{}' tag:",
        input.query_tag
    )));
    entries.extend(input.items.iter().map(|item| MenuEntry::Toggle {
        label: item.display_name.clone(),
        checked: item.has_tag(input.query_tag),
        on_invoke: MenuCommand::ToggleTag(item.id.clone()),
    }));

    entries
}

fn about_notice(query_tag: &str, app_version: &str) -> Notice {
    Notice::info(
        format!("QuickHAB {app_version}"),
        format!(
            "This app allows you to quickly send ON actions to your openHAB items. \
             You can select which items appear in the Settings menu. \
             All items with a '{query_tag}' tag attached will appear in the menu."
        ),
    )
}
