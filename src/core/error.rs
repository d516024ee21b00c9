use std::fmt;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YtError {
    /// The stream URL did not match any known video identifier pattern.
    #[error("Could not extract video ID from URL: {url}")]
    NoVideoId {
        /// The URL as it was supplied.
        url: String,
    },

    /// Both the popout and the watch page were fetched but neither yielded usable tokens.
    #[error(
        "Could not extract live chat tokens. popoutStatus={popout_status} popoutUri={popout_url} \
         watchStatus={watch_status} watchUri={watch_url} snippet={snippet}"
    )]
    TokensNotFound {
        /// HTTP status of the popout chat page.
        popout_status: u16,
        /// Final URI of the popout chat page (after redirects).
        popout_url: String,
        /// HTTP status of the watch page.
        watch_status: u16,
        /// Final URI of the watch page (after redirects).
        watch_url: String,
        /// One-line, truncated prefix of the last HTML body.
        snippet: String,
    },

    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The chat-fetch body was not JSON or lacked the expected root shape.
    #[error("Malformed chat response: {0}")]
    MalformedResponse(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured chat URL failed validation.
    #[error("Invalid chat URL `{0}`: must be a non-empty http:// or https:// URI")]
    InvalidUrl(String),

    /// The configuration file could not be read or written.
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Coarse classification of a [`YtError`], used for status lines and throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoVideoId,
    TokensNotFound,
    NetworkError,
    MalformedResponse,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoVideoId => "NoVideoId",
            ErrorKind::TokensNotFound => "TokensNotFound",
            ErrorKind::NetworkError => "NetworkError",
            ErrorKind::MalformedResponse => "MalformedResponse",
            ErrorKind::Config => "Config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl YtError {
    /// Which taxonomy bucket this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            YtError::NoVideoId { .. } => ErrorKind::NoVideoId,
            YtError::TokensNotFound { .. } => ErrorKind::TokensNotFound,
            YtError::Http(_) | YtError::Status { .. } => ErrorKind::NetworkError,
            YtError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            YtError::Url(_)
            | YtError::InvalidUrl(_)
            | YtError::ConfigIo(_)
            | YtError::ConfigParse(_)
            | YtError::ConfigWrite(_) => ErrorKind::Config,
        }
    }

    /// Equality key for error throttling: the kind plus the rendered message.
    pub fn signature(&self) -> String {
        format!("{}|{}", self.kind(), self)
    }
}
