//! # soql-agent-tools
//!
//! Agent-facing surfaces for the SOQL connector.
//!
//! - [`SoqlTool`]: a single function tool, `salesforce_soql_tool`, taking a
//!   `soql_query` string and returning the query result JSON. Its
//!   [`ToolDefinition`] renders in OpenAI and Anthropic tool formats.
//! - [`McpServerLaunch`]: the command line and environment for running the
//!   community Salesforce MCP server over stdio. This crate only describes
//!   the process; it never speaks the protocol.
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use soql_agent_tools::{ConnectorConfig, SoqlTool};
//!
//! let tool = SoqlTool::new(ConnectorConfig::from_env())?;
//! let output = tool.call(&json!({"soql_query": "SELECT Id FROM Account LIMIT 1"})).await?;
//! println!("{output}");
//! ```

mod error;
mod mcp;
mod tool;

pub use error::ToolError;
pub use mcp::{
    McpServerLaunch, CONNECTION_TYPE_VAR, DEFAULT_CONNECTION_TYPE, INSTANCE_URL_VAR,
    MCP_SERVER_PACKAGE,
};
pub use tool::{SoqlTool, ToolDefinition, SOQL_QUERY_ARG, SOQL_TOOL_DEFINITION};

pub use soql_agent_rest::{ConnectorConfig, QueryResult};
