//! Error types for authentication.
//!
//! Error messages never include the client secret or an access token;
//! provider bodies are sanitized before they are stored.

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for authentication operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Create an error whose kind already carries the text of `wrapped`.
    ///
    /// Only the cause underneath `wrapped` is kept as the source, so the
    /// upstream body appears once in an error chain.
    pub(crate) fn absorbing(kind: ErrorKind, wrapped: soql_agent_client::Error) -> Self {
        Self {
            kind,
            source: wrapped.source,
        }
    }

    /// Names of the configuration values that were missing, if this is a
    /// configuration error.
    pub fn missing_fields(&self) -> &[String] {
        match &self.kind {
            ErrorKind::Configuration { missing } => missing,
            _ => &[],
        }
    }

    /// Returns true if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration { .. })
    }

    /// Returns true if this is an authentication error.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication { .. })
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// One or more required configuration values are absent or empty.
    #[error(
        "Missing Salesforce credentials. Please set {} in your environment variables or .env file",
        .missing.join(", ")
    )]
    Configuration { missing: Vec<String> },

    /// The token exchange failed: non-success status, transport failure, or
    /// an unusable token document.
    #[error("Authentication failed: {message}{}", describe_response(.status, .body))]
    Authentication {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },
}

fn describe_response(status: &Option<u16>, body: &Option<String>) -> String {
    match (status, body) {
        (Some(status), Some(body)) => format!(" (HTTP {status})\nResponse: {body}"),
        (Some(status), None) => format!(" (HTTP {status})"),
        (None, Some(body)) => format!("\nResponse: {body}"),
        (None, None) => String::new(),
    }
}
