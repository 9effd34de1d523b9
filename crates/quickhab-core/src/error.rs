// ── Core error types ──
//
// User-facing errors from quickhab-core. The `Display` text of each
// variant is what ends up in dialogs and in the menu's error slot.
// `From<quickhab_api::Error>` folds the REST taxonomy into these.

use std::error::Error as _;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote errors ────────────────────────────────────────────────
    /// DNS, connect, timeout, or malformed-address failures.
    #[error("{message}")]
    Transport { message: String },

    #[error("Item not found.")]
    NotFound,

    #[error("Item is not editable.")]
    NotEditable,

    #[error("Server returned code {status}.")]
    Server { status: u16 },

    #[error("Unexpected response from server: {message}")]
    InvalidResponse { message: String },

    // ── Local errors ─────────────────────────────────────────────────
    /// Blank or otherwise unusable user input, rejected before any I/O.
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for errors raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<quickhab_api::Error> for CoreError {
    fn from(err: quickhab_api::Error) -> Self {
        match err {
            quickhab_api::Error::Transport(ref e) => CoreError::Transport {
                message: with_sources(e),
            },
            quickhab_api::Error::InvalidUrl(_) => CoreError::Transport {
                message: err.to_string(),
            },
            quickhab_api::Error::NotFound => CoreError::NotFound,
            quickhab_api::Error::NotEditable => CoreError::NotEditable,
            quickhab_api::Error::Server { status } => CoreError::Server { status },
            quickhab_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}

/// Join an error with its source chain (`outer: inner: root`).
///
/// `reqwest` keeps the useful part ("Connection refused") in the chain.
fn with_sources(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
