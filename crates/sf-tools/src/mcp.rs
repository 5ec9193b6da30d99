//! Launch parameters for the Salesforce MCP server.
//!
//! Describes the stdio subprocess an agent host starts to talk to the
//! community `@tsmztech/mcp-server-salesforce` server. Nothing here spawns
//! the process or speaks MCP.

use std::collections::BTreeMap;
use std::process::Stdio;

use serde_json::Value;
use soql_agent_auth::{CLIENT_ID_VAR, CLIENT_SECRET_VAR};
use soql_agent_rest::ConnectorConfig;
use tracing::debug;

/// npm package of the MCP server.
pub const MCP_SERVER_PACKAGE: &str = "@tsmztech/mcp-server-salesforce";
/// Selects how the MCP server authenticates.
pub const CONNECTION_TYPE_VAR: &str = "SALESFORCE_CONNECTION_TYPE";
/// Connection type used when none is configured.
pub const DEFAULT_CONNECTION_TYPE: &str = "OAuth_2.0_Client_Credentials";
/// Base URL the MCP server authenticates against.
pub const INSTANCE_URL_VAR: &str = "SALESFORCE_INSTANCE_URL";

const MCP_COMMAND: &str = "npx";

/// Command, arguments and environment for the MCP server subprocess.
///
/// Variables with no value are left out of the environment. The client
/// secret is redacted in Debug output and in [`to_redacted_json`].
///
/// [`to_redacted_json`]: McpServerLaunch::to_redacted_json
#[derive(Clone, PartialEq, Eq)]
pub struct McpServerLaunch {
    command: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl std::fmt::Debug for McpServerLaunch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServerLaunch")
            .field("command", &self.command)
            .field("args", &self.args)
            .field("env", &self.redacted_env())
            .finish()
    }
}

impl McpServerLaunch {
    /// Build launch parameters from connector settings, using the default
    /// connection type.
    pub fn from_config(config: &ConnectorConfig) -> Self {
        let mut env = BTreeMap::new();
        env.insert(
            CONNECTION_TYPE_VAR.to_string(),
            DEFAULT_CONNECTION_TYPE.to_string(),
        );

        let values = [
            (CLIENT_ID_VAR, config.client_id()),
            (CLIENT_SECRET_VAR, config.client_secret()),
            (INSTANCE_URL_VAR, config.my_domain_url()),
        ];
        env.extend(
            values
                .into_iter()
                .filter_map(|(name, value)| Some((name.to_string(), value?.to_string()))),
        );

        Self {
            command: MCP_COMMAND.to_string(),
            args: vec!["-y".to_string(), MCP_SERVER_PACKAGE.to_string()],
            env,
        }
    }

    /// Build launch parameters from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build launch parameters through an arbitrary lookup function.
    ///
    /// Reads the connector variables plus `SALESFORCE_CONNECTION_TYPE`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let connection_type = lookup(CONNECTION_TYPE_VAR);
        let launch = Self::from_config(&ConnectorConfig::from_lookup(&lookup));
        match connection_type {
            Some(connection_type) => launch.with_connection_type(connection_type),
            None => launch,
        }
    }

    /// Override the connection type. A blank value keeps the current one.
    pub fn with_connection_type(mut self, connection_type: impl Into<String>) -> Self {
        let connection_type = connection_type.into();
        let connection_type = connection_type.trim();
        if !connection_type.is_empty() {
            self.env
                .insert(CONNECTION_TYPE_VAR.to_string(), connection_type.to_string());
        }
        self
    }

    /// The executable.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Command line arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Environment passed to the subprocess, secret included.
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Build a process command with piped stdio, ready for an MCP client.
    ///
    /// The command is not spawned.
    pub fn to_command(&self) -> tokio::process::Command {
        debug!(command = %self.command, args = ?self.args, "Preparing MCP server command");

        let mut command = tokio::process::Command::new(&self.command);
        command
            .args(&self.args)
            .envs(&self.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        command
    }

    /// JSON description of the launch, with the client secret redacted.
    pub fn to_redacted_json(&self) -> Value {
        serde_json::json!({
            "command": self.command,
            "args": self.args,
            "env": self.redacted_env(),
        })
    }

    fn redacted_env(&self) -> BTreeMap<&str, &str> {
        self.env
            .iter()
            .map(|(name, value)| {
                let value = if name == CLIENT_SECRET_VAR {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (name.as_str(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_agent_auth::MY_DOMAIN_URL_VAR;
    use std::collections::HashMap;
    use std::ffi::OsStr;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn full_config() -> ConnectorConfig {
        ConnectorConfig::new()
            .with_client_id("client123")
            .with_client_secret("super_secret_value")
            .with_my_domain_url("https://acme.my.salesforce.com")
    }

    #[test]
    fn test_from_config_builds_npx_launch() {
        let launch = McpServerLaunch::from_config(&full_config());

        assert_eq!(launch.command(), "npx");
        assert_eq!(launch.args(), ["-y", "@tsmztech/mcp-server-salesforce"]);
        assert_eq!(
            launch.env().get(CONNECTION_TYPE_VAR).map(String::as_str),
            Some(DEFAULT_CONNECTION_TYPE)
        );
        assert_eq!(
            launch.env().get(INSTANCE_URL_VAR).map(String::as_str),
            Some("https://acme.my.salesforce.com")
        );
        assert_eq!(
            launch.env().get(CLIENT_SECRET_VAR).map(String::as_str),
            Some("super_secret_value")
        );
    }

    #[test]
    fn test_unset_values_are_omitted() {
        let launch = McpServerLaunch::from_config(&ConnectorConfig::new().with_client_id("id"));

        assert!(launch.env().contains_key(CLIENT_ID_VAR));
        assert!(!launch.env().contains_key(CLIENT_SECRET_VAR));
        assert!(!launch.env().contains_key(INSTANCE_URL_VAR));
        assert_eq!(launch.env().len(), 2);
    }

    #[test]
    fn test_from_lookup_honours_connection_type() {
        let launch = McpServerLaunch::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (MY_DOMAIN_URL_VAR, "https://acme.my.salesforce.com"),
            (CONNECTION_TYPE_VAR, "Salesforce_CLI"),
        ]));

        assert_eq!(
            launch.env().get(CONNECTION_TYPE_VAR).map(String::as_str),
            Some("Salesforce_CLI")
        );
        assert_eq!(
            launch.env().get(INSTANCE_URL_VAR).map(String::as_str),
            Some("https://acme.my.salesforce.com")
        );
    }

    #[test]
    fn test_blank_connection_type_keeps_default() {
        let launch = McpServerLaunch::from_config(&full_config()).with_connection_type("  ");
        assert_eq!(
            launch.env().get(CONNECTION_TYPE_VAR).map(String::as_str),
            Some(DEFAULT_CONNECTION_TYPE)
        );
    }

    #[test]
    fn test_debug_and_json_redact_secret() {
        let launch = McpServerLaunch::from_config(&full_config());

        let debug_output = format!("{:?}", launch);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_value"));

        let json = launch.to_redacted_json();
        assert_eq!(json["env"][CLIENT_SECRET_VAR], "[REDACTED]");
        assert_eq!(json["env"][CLIENT_ID_VAR], "client123");
        assert_eq!(json["command"], "npx");
    }

    #[test]
    fn test_to_command_carries_program_and_args() {
        let launch = McpServerLaunch::from_config(&full_config());
        let command = launch.to_command();
        let std_command = command.as_std();

        assert_eq!(std_command.get_program(), "npx");
        let args: Vec<_> = std_command.get_args().collect();
        assert_eq!(args, ["-y", "@tsmztech/mcp-server-salesforce"]);
        assert!(std_command
            .get_envs()
            .any(|(name, value)| name == INSTANCE_URL_VAR
                && value == Some(OsStr::new("https://acme.my.salesforce.com"))));
    }
}
