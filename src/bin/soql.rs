//! Command line front end for the SOQL connector.
//!
//! ```sh
//! soql query "SELECT Id, Name FROM Account LIMIT 5"
//! soql tool-definition --format anthropic
//! soql mcp-launch
//! ```
//!
//! Settings come from the environment, with a `.env` file in the working
//! directory loaded first. Set `RUST_LOG=debug` to see request tracing.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use salesforce_soql_agent::tools::SOQL_TOOL_DEFINITION;
use salesforce_soql_agent::{ClientConfig, ConnectorConfig, McpServerLaunch, SoqlTool};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "soql", version, about = "Run SOQL queries against Salesforce")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a SOQL query and print the JSON result
    Query {
        /// The SOQL statement, e.g. "SELECT Id FROM Account LIMIT 5"
        soql: String,
    },
    /// Print the salesforce_soql_tool definition
    ToolDefinition {
        #[arg(long, value_enum, default_value_t = ToolFormat::Openai)]
        format: ToolFormat,
    },
    /// Print the MCP server launch parameters (secret redacted)
    McpLaunch,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ToolFormat {
    Openai,
    Anthropic,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Query { soql } => {
            let client_config =
                ClientConfig::from_env().context("invalid HTTP client configuration")?;
            let tool = SoqlTool::with_config(ConnectorConfig::from_env(), client_config)?;
            tool.invoke(&soql).await?.into_inner()
        }
        Command::ToolDefinition { format } => match format {
            ToolFormat::Openai => SOQL_TOOL_DEFINITION.to_openai_format(),
            ToolFormat::Anthropic => SOQL_TOOL_DEFINITION.to_anthropic_format(),
        },
        Command::McpLaunch => McpServerLaunch::from_env().to_redacted_json(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
