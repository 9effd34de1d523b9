use thiserror::Error;

/// Top-level error type for the `quickhab-api` crate.
///
/// Every REST call resolves to either a response body or one of these.
/// The messages of the status variants are shown to the user verbatim,
/// so they read as complete sentences.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The configured server address does not form a valid URL.
    #[error("Invalid server address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Status mapping ──────────────────────────────────────────────
    /// HTTP 404.
    #[error("Item not found.")]
    NotFound,

    /// HTTP 405.
    #[error("Item is not editable.")]
    NotEditable,

    /// Any other non-200 status.
    #[error("Server returned code {status}.")]
    Server { status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Unexpected response from server: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the request never produced an HTTP status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::InvalidUrl(_))
    }

    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::NotEditable => Some(405),
            Self::Server { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) | Self::Deserialization { .. } => None,
        }
    }

    /// Map a non-200 HTTP status to its error variant.
    pub(crate) fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            405 => Self::NotEditable,
            status => Self::Server { status },
        }
    }
}
