//! The `salesforce_soql_tool` function tool.

use serde::Serialize;
use serde_json::Value;
use soql_agent_client::ClientConfig;
use soql_agent_rest::{ConnectorConfig, QueryExecutor, QueryResult};
use tracing::{instrument, warn};

use crate::error::ToolError;

/// Name of the single argument the tool accepts.
pub const SOQL_QUERY_ARG: &str = "soql_query";

/// Definition of a tool an LLM can call.
///
/// Holds the name, description and JSON Schema of the parameters, and
/// renders them in the shapes the OpenAI and Anthropic APIs expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    /// Name used in function calling.
    pub name: &'static str,
    /// What the tool does, written for the model.
    pub description: &'static str,
    /// JSON Schema for the parameters.
    pub parameters: &'static str,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        parameters: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            parameters,
        }
    }

    /// The parameter schema as JSON.
    pub fn parameters_schema(&self) -> Value {
        serde_json::from_str(self.parameters).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert to OpenAI-compatible tool format.
    pub fn to_openai_format(&self) -> Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema()
            }
        })
    }

    /// Convert to Anthropic-compatible tool format.
    pub fn to_anthropic_format(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema()
        })
    }
}

/// Definition of `salesforce_soql_tool`.
pub const SOQL_TOOL_DEFINITION: ToolDefinition = ToolDefinition::new(
    "salesforce_soql_tool",
    "Execute a SOQL query against Salesforce using the OAuth 2.0 client credentials flow. \
     Returns the query result as JSON, including totalSize, done and the records array.",
    r#"{
        "type": "object",
        "properties": {
            "soql_query": {
                "type": "string",
                "description": "A SOQL query string, e.g. SELECT Id, Name FROM Account LIMIT 10"
            }
        },
        "required": ["soql_query"]
    }"#,
);

/// Function tool that runs one SOQL query per call.
///
/// Every call goes through the full chain: credential check, token
/// exchange, query. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SoqlTool {
    executor: QueryExecutor,
}

impl SoqlTool {
    /// Create the tool with the default HTTP configuration.
    pub fn new(config: ConnectorConfig) -> Result<Self, ToolError> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create the tool with custom HTTP configuration.
    pub fn with_config(
        config: ConnectorConfig,
        client_config: ClientConfig,
    ) -> Result<Self, ToolError> {
        let executor = QueryExecutor::with_config(config, client_config)
            .map_err(|e| ToolError::execution(SOQL_TOOL_DEFINITION.name, e))?;
        Ok(Self { executor })
    }

    /// Create the tool over an existing executor.
    pub fn from_executor(executor: QueryExecutor) -> Self {
        Self { executor }
    }

    /// The tool's definition.
    pub fn definition(&self) -> &'static ToolDefinition {
        &SOQL_TOOL_DEFINITION
    }

    /// Run `soql` and return the result document.
    pub async fn invoke(&self, soql: &str) -> Result<QueryResult, ToolError> {
        self.executor
            .execute_query(soql)
            .await
            .map_err(|e| ToolError::execution(SOQL_TOOL_DEFINITION.name, e))
    }

    /// Run the tool with model-supplied arguments.
    ///
    /// `args` must be an object with a string `soql_query` field. The
    /// arguments are not logged.
    #[instrument(skip(self, args), fields(tool = SOQL_TOOL_DEFINITION.name))]
    pub async fn call(&self, args: &Value) -> Result<Value, ToolError> {
        let soql = args
            .get(SOQL_QUERY_ARG)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ToolError::invalid_arguments(
                    SOQL_TOOL_DEFINITION.name,
                    format!("'{SOQL_QUERY_ARG}' must be a string"),
                )
            })?;

        match self.invoke(soql).await {
            Ok(result) => Ok(result.into_inner()),
            Err(e) => {
                warn!(error = %e, "Tool call failed");
                Err(e)
            }
        }
    }
}
