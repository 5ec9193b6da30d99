//! SOQL query results and endpoint construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded body of a successful query call, passed through untouched.
///
/// Accessors read the well-known fields (`totalSize`, `done`, `records`,
/// `nextRecordsUrl`) without requiring them to exist. Any other fields the
/// API returns are preserved and serialize back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Value);

impl QueryResult {
    /// Wrap an already decoded response document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `totalSize` field, if present.
    pub fn total_size(&self) -> Option<u64> {
        self.0.get("totalSize").and_then(Value::as_u64)
    }

    /// The `done` field, if present.
    pub fn is_done(&self) -> Option<bool> {
        self.0.get("done").and_then(Value::as_bool)
    }

    /// The `records` array, or an empty slice when absent.
    pub fn records(&self) -> &[Value] {
        self.0
            .get("records")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relative URL of the next page, when the API paginated the result.
    ///
    /// Only the first page is ever fetched.
    pub fn next_records_url(&self) -> Option<&str> {
        self.0.get("nextRecordsUrl").and_then(Value::as_str)
    }

    /// Borrow the raw document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw document.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for QueryResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<QueryResult> for Value {
    fn from(result: QueryResult) -> Self {
        result.0
    }
}

/// Build the query endpoint for an instance and API version.
///
/// `api_version` may be given with or without its leading `v`.
///
/// ```
/// use soql_agent_rest::query_url;
///
/// assert_eq!(
///     query_url("https://acme.my.salesforce.com/", "v60.0"),
///     "https://acme.my.salesforce.com/services/data/v60.0/query"
/// );
/// ```
pub fn query_url(instance_url: &str, api_version: &str) -> String {
    format!(
        "{}/services/data/v{}/query",
        instance_url.trim_end_matches('/'),
        api_version.trim_start_matches(['v', 'V'])
    )
}
