//! Error types. `ConfigError` is fatal and aborts before any request is
//! sent; `AskError` is recorded into the per-question result and never
//! stops a run.

/// Fatal configuration problem (CLI input, question-set file).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read question set {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse question set {path}: {message}")]
    Parse { path: String, message: String },

    #[error("question set {path} is empty")]
    Empty { path: String },

    /// Duplicate ids would silently overwrite comparison records downstream.
    #[error("duplicate question id {id} in {path}")]
    DuplicateId { path: String, id: String },
}

/// Per-question endpoint failure. Rendered into the result's `error` field.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {message}")]
    InvalidBody { message: String },

    #[error("response JSON has no \"response\" string field")]
    MissingResponseField,
}
