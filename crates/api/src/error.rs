use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. The message format is relied upon by callers.
    #[error("HTTP error! Status: {status}, Body: {body}")]
    Http { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid response format: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("JSON serialization error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),

    #[error("Credential is not a valid header value: {0}")]
    InvalidCredential(#[source] InvalidHeaderValue),
}

impl ApiError {
    /// Status code of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ApiError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED.as_u16() => {
                Some("Verify the encoded credential (base64 of user:token)")
            }
            ApiError::Http { status, .. } if *status == StatusCode::NOT_FOUND.as_u16() => {
                Some("Check the issue key and the base URL")
            }
            ApiError::Http { status, .. } if *status == StatusCode::BAD_REQUEST.as_u16() => {
                Some("Check the custom field id and the value shape")
            }
            ApiError::Transport(_) => Some("Check your network connection or try again later"),
            ApiError::InvalidUrl(_) | ApiError::CannotBeABase(_) => {
                Some("Use an absolute http(s) base URL such as https://example.atlassian.net")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
