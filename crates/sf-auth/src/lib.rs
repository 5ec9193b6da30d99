//! # soql-agent-auth
//!
//! Salesforce OAuth 2.0 client-credentials authentication.
//!
//! ## Security
//!
//! - Client secrets and access tokens are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Provider bodies placed in errors are sanitized
//!
//! ## Flow
//!
//! 1. [`ConnectorConfig`] is built once by the caller, usually with
//!    [`ConnectorConfig::from_env`].
//! 2. [`CredentialResolver`] validates it and derives the token endpoint.
//! 3. [`ClientCredentialsFlow`] exchanges the credentials for a
//!    [`TokenResponse`].
//!
//! Nothing is cached: every exchange hits the token endpoint.
//!
//! ## Example
//!
//! ```rust,ignore
//! use soql_agent_auth::{ClientCredentialsFlow, ConnectorConfig, CredentialResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soql_agent_auth::Error> {
//!     let resolver = CredentialResolver::new(ConnectorConfig::from_env());
//!     let credentials = resolver.resolve()?;
//!
//!     let flow = ClientCredentialsFlow::default_client()?;
//!     let token = flow.acquire_token(&credentials).await?;
//!     println!("authenticated against {}", token.instance_url);
//!     Ok(())
//! }
//! ```

mod config;
mod credentials;
mod error;
mod oauth;

pub use config::{
    ConnectorConfig, API_VERSION_VAR, CLIENT_ID_VAR, CLIENT_SECRET_VAR, MY_DOMAIN_URL_VAR,
};
pub use credentials::{resolve_credentials, CredentialResolver, Credentials, OAUTH_TOKEN_PATH};
pub use error::{Error, ErrorKind, Result};
pub use oauth::{acquire_token, ClientCredentialsFlow, TokenResponse};
