// ── UI seam ──
//
// The controller never touches the rendering surface directly from a
// background task. Every render and dialog is wrapped in a `UiJob` and
// handed to a `UiContext`, which runs it wherever the surface lives.

use tokio::sync::mpsc;

/// A unit of work that must run on the rendering surface's thread.
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Marshals jobs onto the rendering surface's thread.
pub trait UiContext: Send + Sync + 'static {
    fn run(&self, job: UiJob);
}

/// Runs every job immediately on the calling thread.
///
/// For surfaces that are themselves thread-safe, and for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineUi;

impl UiContext for InlineUi {
    fn run(&self, job: UiJob) {
        job();
    }
}

/// Sending half of a job queue drained by the UI thread.
#[derive(Debug, Clone)]
pub struct ChannelUi {
    tx: mpsc::UnboundedSender<UiJob>,
}

/// Receiving half of a job queue. Owned by the UI thread.
#[derive(Debug)]
pub struct UiQueue {
    rx: mpsc::UnboundedReceiver<UiJob>,
}

impl ChannelUi {
    /// Create a connected sender/queue pair.
    pub fn channel() -> (Self, UiQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, UiQueue { rx })
    }
}

impl UiContext for ChannelUi {
    fn run(&self, job: UiJob) {
        // Only fails once the UI thread has dropped its queue, i.e. on exit.
        if self.tx.send(job).is_err() {
            tracing::debug!("UI queue closed, dropping job");
        }
    }
}

impl UiQueue {
    /// Run every job queued so far, in order. Returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }
}

// ── Surface contract ─────────────────────────────────────────────────

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A one-off message dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Warning,
        }
    }
}

/// A single-line text input dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    /// Pre-filled value (the current setting).
    pub initial: String,
}

/// Whatever shows the menu: a tray icon, a terminal, a test double.
///
/// `render`, `show_message` and `release` are only ever called through a
/// [`UiContext`]. `prompt` blocks until the user answers and is called
/// from a blocking worker thread; `None` means the dialog was dismissed.
pub trait MenuSurface: Send + Sync + 'static {
    fn render(&self, menu: crate::menu::MenuDescription);
    fn show_message(&self, notice: Notice);
    fn prompt(&self, prompt: Prompt) -> Option<String>;
    /// Tear down the tray entry. The host exits afterwards.
    fn release(&self);
}
