//! `quickhab`: quick access to openHAB items from a terminal menu.
//!
//! Items carrying the configured filter tag show up as one-click `ON`
//! actions; the Settings submenu edits the server address, the filter tag
//! and which items carry it. The menu itself is driven by
//! `quickhab-core`'s [`SyncController`]; this binary only wires up
//! persistence, logging and the terminal surface.
//!
//! Logs go to a file in the platform data dir so they never interleave
//! with the menu.

mod surface;

use std::sync::Arc;

use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use quickhab_config::FilePreferences;
use quickhab_core::{
    ChannelUi, ConfigAccessor, ControllerParts, PreferenceStore, SyncController, SyncState,
    TransportConfig, UiQueue,
};

use crate::surface::TerminalSurface;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_FILE: &str = "quickhab.log";

/// Set up file-based tracing. Returns a guard that must be held for the
/// lifetime of the process so buffered lines are flushed.
fn setup_tracing() -> Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickhab=info"));

    let log_dir = quickhab_config::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}

fn menu_title(state: &SyncState) -> String {
    match state {
        SyncState::Idle => "QuickHAB".into(),
        SyncState::Refreshing => "QuickHAB (refreshing...)".into(),
        SyncState::ActionInFlight(id) => format!("QuickHAB (sending to {id}...)"),
    }
}

/// Show the menu, run the picked command, repeat until quit.
///
/// The UI queue is drained on this task before every selection, so renders
/// and dialogs from background flows land between two menus rather than
/// on top of one.
async fn run(
    controller: &SyncController,
    surface: &Arc<TerminalSurface>,
    queue: &mut UiQueue,
) -> Result<()> {
    let quit = controller.quit_token();

    loop {
        queue.drain();
        if quit.is_cancelled() || surface.is_released() {
            break;
        }

        let menu = surface.current_menu();
        let title = menu_title(&controller.state().borrow());
        let picker = Arc::clone(surface);
        let choice = tokio::task::spawn_blocking(move || picker.choose(&title, &menu)).await?;

        match choice {
            Ok(Some(command)) => controller.invoke(command).await,
            Ok(None) => {}
            Err(e) => {
                // Ctrl-C or a closed terminal ends up here.
                warn!(error = %e, "menu selection failed, quitting");
                controller.quit();
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _log_guard = setup_tracing()?;
    info!(version = VERSION, "starting quickhab");

    let prefs: Arc<dyn PreferenceStore> = Arc::new(FilePreferences::open()?);
    let (ui, mut queue) = ChannelUi::channel();
    let surface = Arc::new(TerminalSurface::new());

    let controller = SyncController::new(ControllerParts {
        config: ConfigAccessor::new(prefs),
        surface: surface.clone(),
        ui: Arc::new(ui),
        transport: TransportConfig::default(),
        app_version: VERSION.into(),
    })?;

    println!("Loading items...");
    controller.start().await;

    run(&controller, &surface, &mut queue).await?;

    info!("quickhab exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickhab_core::ItemId;

    use super::*;

    #[test]
    fn title_reflects_state() {
        assert_eq!(menu_title(&SyncState::Idle), "QuickHAB");
        assert_eq!(
            menu_title(&SyncState::Refreshing),
            "QuickHAB (refreshing...)"
        );
        assert_eq!(
            menu_title(&SyncState::ActionInFlight(ItemId::from("Light1"))),
            "QuickHAB (sending to Light1...)"
        );
    }
}
