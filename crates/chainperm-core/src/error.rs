use thiserror::Error;

/// Errors raised by the session client and the chain pipeline.
///
/// Every variant is terminal for a run; nothing here is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: transport error: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("authentication failed: HTTP {status} {body}")]
    Authentication { status: u16, body: String },

    #[error("chain lookup failed: HTTP {status} {body}")]
    ChainLookup { status: u16, body: String },

    #[error("symbology lookup failed: HTTP {status} {body}")]
    Symbology { status: u16, body: String },

    #[error("{operation}: unexpected response body: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    #[error("chain '{chain}' returned no constituents")]
    ChainEmpty { chain: String },

    #[error("input limit ({limit}) is higher than number of chain constituents ({available})")]
    LimitExceeded { limit: usize, available: usize },

    #[error("failed to render result table: {0}")]
    Render(#[from] std::io::Error),
}

impl ClientError {
    pub(crate) fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// HTTP status of a non-2xx response, when the error came from one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::ChainLookup { status, .. }
            | Self::Symbology { status, .. } => Some(*status),
            _ => None,
        }
    }
}
