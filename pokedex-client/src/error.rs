use pokedex_core::CoreError;

/// Errors that can occur while talking to the catalog or box API.
///
/// Every variant renders to a single line suitable for showing to the user.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(
        "Unable to connect to the server. Please check your internet connection or try again later."
    )]
    Connect(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` comes from the body when it has one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid JSON response from server")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Server returned an empty response")]
    EmptyResponse,

    #[error("Pokemon with ID {pokemon_id} not found")]
    NotFound { pokemon_id: u32 },

    #[error("Not logged in: set a bearer token with `pokedex config set-token` or POKEDEX_TOKEN")]
    NotLoggedIn,

    #[error("{0}")]
    Validation(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap a transport error, singling out connection failures.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Network(err)
        }
    }

    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
