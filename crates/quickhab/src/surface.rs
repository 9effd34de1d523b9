//! Terminal rendering surface.
//!
//! The tray menu becomes a `dialoguer` selection list. Submenus open a
//! nested list with a trailing back row; rows without a command (disabled
//! text, separators) are shown but simply re-open the list when picked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use quickhab_core::{
    MenuCommand, MenuDescription, MenuEntry, MenuSurface, Notice, NoticeLevel, Prompt,
};

const BACK_LABEL: &str = "< Back";
const RULE: &str = "────────────────────";

/// Holds the latest rendered menu until the host loop shows it.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    menu: Mutex<MenuDescription>,
    released: AtomicBool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_menu(&self) -> MenuDescription {
        self.menu
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Show `menu` and block until a command is picked.
    ///
    /// `Ok(None)` when the top-level list is dismissed with Esc.
    pub fn choose(
        &self,
        title: &str,
        menu: &MenuDescription,
    ) -> Result<Option<MenuCommand>, dialoguer::Error> {
        choose_from(title, &menu.entries, false)
    }
}

impl MenuSurface for TerminalSurface {
    fn render(&self, menu: MenuDescription) {
        debug!(entries = menu.entries.len(), "menu rendered");
        *self.menu.lock().unwrap_or_else(PoisonError::into_inner) = menu;
    }

    fn show_message(&self, notice: Notice) {
        let title = match notice.level {
            NoticeLevel::Info => notice.title.cyan().bold().to_string(),
            NoticeLevel::Warning => notice.title.yellow().bold().to_string(),
        };
        println!("\n{title}\n{}\n", notice.body);
    }

    fn prompt(&self, prompt: Prompt) -> Option<String> {
        println!("{}", prompt.message);
        let answer = Input::<String>::new()
            .with_prompt(">")
            .with_initial_text(prompt.initial)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "prompt failed");
                None
            }
        }
    }

    fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
        println!("{}", "Goodbye.".dimmed());
    }
}

// ── Selection ───────────────────────────────────────────────────────

/// What picking row `index` of a list means.
#[derive(Debug, PartialEq)]
enum Pick<'a> {
    Command(&'a MenuCommand),
    Open {
        label: &'a str,
        entries: &'a [MenuEntry],
    },
    /// Disabled text or a separator.
    Inert,
    /// The trailing back row of a nested list.
    Back,
}

fn pick(entries: &[MenuEntry], index: usize) -> Pick<'_> {
    match entries.get(index) {
        None => Pick::Back,
        Some(MenuEntry::Submenu { label, entries }) => Pick::Open { label, entries },
        Some(entry) => entry.command().map_or(Pick::Inert, Pick::Command),
    }
}

fn choose_from(
    title: &str,
    entries: &[MenuEntry],
    nested: bool,
) -> Result<Option<MenuCommand>, dialoguer::Error> {
    let mut rows: Vec<String> = entries.iter().map(row_label).collect();
    if nested {
        rows.push(BACK_LABEL.dimmed().to_string());
    }

    let mut cursor = 0;
    loop {
        let Some(index) = Select::new()
            .with_prompt(title)
            .items(&rows)
            .default(cursor)
            .interact_opt()?
        else {
            return Ok(None);
        };
        cursor = index;

        match pick(entries, index) {
            Pick::Command(command) => return Ok(Some(command.clone())),
            Pick::Open { label, entries } => {
                if let Some(command) = choose_from(label, entries, true)? {
                    return Ok(Some(command));
                }
            }
            Pick::Inert => debug!(index, "inert row picked"),
            Pick::Back => return Ok(None),
        }
    }
}

fn row_label(entry: &MenuEntry) -> String {
    match entry {
        MenuEntry::Action { label, .. } => label.clone(),
        MenuEntry::Toggle { label, checked, .. } => {
            let mark = if *checked { 'x' } else { ' ' };
            format!("[{mark}] {label}")
        }
        MenuEntry::StaticText {
            label,
            on_invoke: Some(_),
        } => label.yellow().to_string(),
        MenuEntry::StaticText {
            label,
            on_invoke: None,
        } => label.dimmed().to_string(),
        MenuEntry::Separator => RULE.dimmed().to_string(),
        MenuEntry::Submenu { label, .. } => format!("{label} >"),
    }
}
