use soql_agent_auth::ConnectorConfig;
use soql_agent_client::ResponseExt;
use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::query::QueryResult;

impl super::QueryExecutor {
    /// Execute a SOQL query and return the first page of results.
    ///
    /// A new access token is requested for every call.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Configuration`] if credentials are missing; nothing is
    ///   sent over the network
    /// - [`ErrorKind::Authentication`] if the token exchange fails; the
    ///   query endpoint is never called
    /// - [`ErrorKind::Query`] if `soql` is blank, the query call fails or
    ///   returns a non-2xx status, or its body is not JSON
    ///
    /// # Security
    ///
    /// `soql` is sent verbatim. Escape any untrusted values interpolated into
    /// a `WHERE` clause before calling this.
    #[instrument(skip(self, soql), fields(api_version = %self.api_version()))]
    pub async fn execute_query(&self, soql: &str) -> Result<QueryResult> {
        if soql.trim().is_empty() {
            return Err(Error::new(ErrorKind::Query {
                status: None,
                message: "query string is empty".to_string(),
                body: None,
            }));
        }

        let credentials = self.resolver.resolve()?;
        let token = self.flow.acquire_token(&credentials).await?;

        let url = self.query_url(&token.instance_url);
        debug!(url = %url, "Issuing SOQL query");

        let request = self
            .http
            .get(url)
            .bearer_auth(&token.access_token)
            .header("Accept", "application/json")
            .query("q", soql);

        let response = self.http.execute(request).await?.error_for_status().await?;
        let status = response.status();

        let result: QueryResult = response.json().await.map_err(|e| {
            Error::absorbing(
                ErrorKind::Query {
                    status: Some(status),
                    message: format!("query response is not valid JSON: {e}"),
                    body: None,
                },
                e,
            )
        })?;

        info!(
            total_size = result.total_size(),
            records = result.records().len(),
            "SOQL query completed"
        );
        Ok(result)
    }
}

/// Execute `soql` with a one-off executor built from `config`.
///
/// See [`QueryExecutor::execute_query`](super::QueryExecutor::execute_query).
pub async fn execute_query(config: ConnectorConfig, soql: &str) -> Result<QueryResult> {
    super::QueryExecutor::new(config)?.execute_query(soql).await
}
