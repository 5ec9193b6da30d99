//! Query executor.
//!
//! Owns the credential resolver, the token flow and the HTTP client that
//! carries both the token exchange and the query call.

use soql_agent_auth::{ClientCredentialsFlow, ConnectorConfig, CredentialResolver};
use soql_agent_client::{ClientConfig, SfHttpClient};

use crate::error::{Error, ErrorKind, Result};

mod query;

pub use query::execute_query;

/// Runs SOQL queries against the org described by a [`ConnectorConfig`].
///
/// Every call to [`execute_query`](QueryExecutor::execute_query) resolves
/// credentials, exchanges them for a fresh token and issues one query. No
/// state is carried between calls, so an executor can be shared freely.
///
/// # Example
///
/// ```rust,ignore
/// use soql_agent_rest::{ConnectorConfig, QueryExecutor};
///
/// let executor = QueryExecutor::new(ConnectorConfig::from_env())?;
/// let result = executor.execute_query("SELECT Id, Name FROM Account LIMIT 5").await?;
/// println!("{} records", result.records().len());
/// ```
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    resolver: CredentialResolver,
    flow: ClientCredentialsFlow,
    http: SfHttpClient,
}

impl QueryExecutor {
    /// Create an executor with the default HTTP configuration.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create an executor with custom HTTP configuration.
    pub fn with_config(config: ConnectorConfig, client_config: ClientConfig) -> Result<Self> {
        let http = SfHttpClient::new(client_config).map_err(|e| {
            Error::absorbing(
                ErrorKind::Query {
                    status: None,
                    message: format!("failed to build HTTP client: {e}"),
                    body: None,
                },
                e,
            )
        })?;

        Ok(Self {
            resolver: CredentialResolver::new(config),
            flow: ClientCredentialsFlow::new(http.clone()),
            http,
        })
    }

    /// Get the connector configuration.
    pub fn config(&self) -> &ConnectorConfig {
        self.resolver.config()
    }

    /// The API version queries are issued against, without its `v` prefix.
    pub fn api_version(&self) -> &str {
        self.config().api_version()
    }

    /// The query endpoint for `instance_url` at this executor's API version.
    pub fn query_url(&self, instance_url: &str) -> String {
        crate::query::query_url(instance_url, self.api_version())
    }
}
