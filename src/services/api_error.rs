use thiserror::Error;

/// Everything that can go wrong talking to the two backends.
/// The detail is logged; the UI only ever shows a generic toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request build error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// 2xx or not, the body carried an `error` field
    #[error("Backend error: {0}")]
    Backend(String),
}
