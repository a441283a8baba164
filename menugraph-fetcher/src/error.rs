use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request for page {page} failed: {source}")]
    Http {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Page {page} returned HTTP status {status}")]
    Status { page: u32, status: u16 },

    #[error("Page {page} body could not be decoded: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Page {page} is malformed: {reason}")]
    MalformedPage { page: u32, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Page number the failure belongs to, if it is tied to one.
    pub fn page(&self) -> Option<u32> {
        match self {
            FetchError::Http { page, .. }
            | FetchError::Status { page, .. }
            | FetchError::Decode { page, .. }
            | FetchError::MalformedPage { page, .. } => Some(*page),
            FetchError::InvalidUrl(_) | FetchError::Client(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
