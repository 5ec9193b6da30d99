//! # salesforce-soql-agent
//!
//! Query Salesforce with SOQL from an LLM agent.
//!
//! Every query runs the same three steps: resolve connected app credentials,
//! exchange them for an access token with the OAuth 2.0 client-credentials
//! flow, then call the REST query endpoint with that token. The JSON result
//! is returned as-is.
//!
//! ## Security
//!
//! - Client secrets and access tokens are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Upstream error bodies are sanitized before they reach an error message
//!
//! ## Crates
//!
//! - **soql-agent-client** - HTTP transport: timeouts, compression, request tracing
//! - **soql-agent-auth** - Connector configuration, credential resolution, token exchange
//! - **soql-agent-rest** - The query executor (feature `rest`)
//! - **soql-agent-tools** - `salesforce_soql_tool` and MCP launch parameters (feature `tools`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesforce_soql_agent::{ConnectorConfig, QueryExecutor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let executor = QueryExecutor::new(ConnectorConfig::from_env())?;
//!     let result = executor
//!         .execute_query("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     for account in result.records() {
//!         println!("{}", account["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub use soql_agent_auth as auth;
pub use soql_agent_client as client;
#[cfg(feature = "rest")]
pub use soql_agent_rest as rest;
#[cfg(feature = "tools")]
pub use soql_agent_tools as tools;

pub use soql_agent_auth::{ConnectorConfig, TokenResponse};
pub use soql_agent_client::ClientConfig;
#[cfg(feature = "rest")]
pub use soql_agent_rest::{execute_query, QueryExecutor, QueryResult};
#[cfg(feature = "tools")]
pub use soql_agent_tools::{McpServerLaunch, SoqlTool, ToolDefinition, ToolError};
