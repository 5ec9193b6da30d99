//! # soql-agent-rest
//!
//! Salesforce SOQL query executor.
//!
//! [`QueryExecutor::execute_query`] runs the whole chain for every call:
//!
//! 1. resolve credentials from the injected [`ConnectorConfig`]
//! 2. exchange them for an access token (client-credentials flow)
//! 3. `GET {instance_url}/services/data/v{version}/query?q={soql}`
//!
//! The JSON document is returned unmodified as a [`QueryResult`]. Only the
//! first page is fetched; `nextRecordsUrl` is exposed but not followed.
//!
//! ## Example
//!
//! ```rust,ignore
//! use soql_agent_rest::{ConnectorConfig, QueryExecutor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soql_agent_rest::Error> {
//!     let executor = QueryExecutor::new(ConnectorConfig::from_env())?;
//!     let result = executor.execute_query("SELECT Id, Name FROM Account LIMIT 5").await?;
//!
//!     println!("{} records", result.total_size().unwrap_or_default());
//!     for record in result.records() {
//!         println!("{}", record["Name"]);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;

pub use client::{execute_query, QueryExecutor};
pub use error::{Error, ErrorKind, Result};
pub use query::{query_url, QueryResult};

pub use soql_agent_auth::ConnectorConfig;
