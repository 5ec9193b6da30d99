//! Tool invocation errors.
//!
//! Messages are meant to be handed back to the model verbatim, so they never
//! contain raw arguments or credentials.

/// Error returned from a tool call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The arguments did not match the tool's parameter schema.
    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments {
        /// Name of the tool.
        tool: String,
        /// Human-readable reason the arguments were rejected.
        reason: String,
    },

    /// The query chain failed.
    #[error("{message}")]
    Execution {
        /// Name of the tool.
        tool: String,
        /// `Failed to execute SOQL query: ...` followed by the cause.
        message: String,
        /// The query error, already rendered into `message`.
        error: soql_agent_rest::Error,
        /// Transport-level cause underneath the query error.
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ToolError {
    /// Create an InvalidArguments error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a query failure.
    ///
    /// Query errors already carry the `Failed to execute SOQL query` prefix;
    /// configuration and authentication errors get it prepended.
    pub fn execution(tool: impl Into<String>, mut error: soql_agent_rest::Error) -> Self {
        let message = if error.is_query() {
            error.to_string()
        } else {
            format!("Failed to execute SOQL query: {error}")
        };
        let cause = error.source.take();
        Self::Execution {
            tool: tool.into(),
            message,
            error,
            cause,
        }
    }

    /// Name of the tool that failed.
    pub fn tool(&self) -> &str {
        match self {
            Self::InvalidArguments { tool, .. } | Self::Execution { tool, .. } => tool,
        }
    }

    /// The underlying query error, for execution failures.
    pub fn query_error(&self) -> Option<&soql_agent_rest::Error> {
        match self {
            Self::Execution { error, .. } => Some(error),
            Self::InvalidArguments { .. } => None,
        }
    }
}
