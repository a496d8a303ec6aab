/// Errors that can occur while fetching the Steam app list.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Steam Web API rejected the API key")]
    InvalidKey,

    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),
}
