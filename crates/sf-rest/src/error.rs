//! Error types for query execution.
//!
//! Callers match on [`ErrorKind`] to tell a configuration problem from a
//! failed token exchange or a failed query. None of them is retried here.

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for query operations.
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

    /// Names of the missing configuration values, if any.
    pub fn missing_fields(&self) -> &[String] {
        match &self.kind {
            ErrorKind::Configuration { missing } => missing,
            _ => &[],
        }
    }

    /// Returns true if required configuration was missing.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration { .. })
    }

    /// Returns true if the token exchange failed.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication { .. })
    }

    /// Returns true if the query request failed.
    pub fn is_query(&self) -> bool {
        matches!(self.kind, ErrorKind::Query { .. })
    }

    /// HTTP status of the failing upstream response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Authentication { status, .. } | ErrorKind::Query { status, .. } => *status,
            ErrorKind::Configuration { .. } => None,
        }
    }

    /// Sanitized upstream body, if there was one.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Authentication { body, .. } | ErrorKind::Query { body, .. } => {
                body.as_deref()
            }
            ErrorKind::Configuration { .. } => None,
        }
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

    /// The token exchange failed.
    #[error("Authentication failed: {message}{}", describe_response(.status, .body))]
    Authentication {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },

    /// The query request failed or returned an unusable body.
    #[error("Failed to execute SOQL query: {message}{}", describe_response(.status, .body))]
    Query {
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

impl From<soql_agent_auth::Error> for Error {
    fn from(err: soql_agent_auth::Error) -> Self {
        let kind = match &err.kind {
            soql_agent_auth::ErrorKind::Configuration { missing } => ErrorKind::Configuration {
                missing: missing.clone(),
            },
            soql_agent_auth::ErrorKind::Authentication {
                status,
                message,
                body,
            } => ErrorKind::Authentication {
                status: *status,
                message: message.clone(),
                body: body.clone(),
            },
        };
        Error {
            kind,
            source: err.source,
        }
    }
}

impl From<soql_agent_client::Error> for Error {
    fn from(err: soql_agent_client::Error) -> Self {
        let status = err.status();
        let body = err.body().map(str::to_string);
        let message = if status.is_some() {
            "query endpoint rejected the request".to_string()
        } else {
            err.to_string()
        };
        Error::absorbing(
            ErrorKind::Query {
                status,
                message,
                body,
            },
            err,
        )
    }
}
