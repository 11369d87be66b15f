// crates/easepark-core/src/error.rs
use thiserror::Error;

/// Errors raised at the fallible edges of the crate: loading feed snapshots,
/// fetching live feeds and parsing settings.
///
/// District resolution and car-park ranking never fail; bad input there is
/// absorbed into fallback labels and sentinel values instead.
#[derive(Debug, Error)]
pub enum EaseParkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EaseParkError>;
