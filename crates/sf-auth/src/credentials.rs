//! Credential resolution.
//!
//! All credential types implement custom Debug to redact sensitive data.

use tracing::debug;

use crate::config::{ConnectorConfig, CLIENT_ID_VAR, CLIENT_SECRET_VAR, MY_DOMAIN_URL_VAR};
use crate::error::{Error, ErrorKind, Result};

/// Path of the OAuth 2.0 token endpoint, relative to the My Domain URL.
pub const OAUTH_TOKEN_PATH: &str = "/services/oauth2/token";

/// Validated client-credentials material for one token exchange.
///
/// The client secret is redacted in Debug output.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    token_url: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl Credentials {
    /// Create credentials with an explicit token endpoint.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: token_url.into(),
        }
    }

    /// The connected app consumer key.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The connected app consumer secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The OAuth token endpoint.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

/// Turns a [`ConnectorConfig`] into [`Credentials`].
///
/// The resolver owns its configuration; resolving is pure and can be
/// repeated.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    config: ConnectorConfig,
}

impl CredentialResolver {
    /// Create a resolver over the given configuration.
    pub fn new(config: ConnectorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Validate the configuration and derive the token endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Configuration`] naming every missing value (in
    /// the order client id, client secret, domain URL) when any of them is
    /// absent or blank.
    pub fn resolve(&self) -> Result<Credentials> {
        resolve_credentials(&self.config)
    }
}

/// Validate `config` and derive the token endpoint.
///
/// See [`CredentialResolver::resolve`].
pub fn resolve_credentials(config: &ConnectorConfig) -> Result<Credentials> {
    let client_id = config.client_id();
    let client_secret = config.client_secret();
    let my_domain_url = config.my_domain_url();

    match (client_id, client_secret, my_domain_url) {
        (Some(client_id), Some(client_secret), Some(my_domain_url)) => {
            let token_url = format!(
                "{}{}",
                my_domain_url.trim_end_matches('/'),
                OAUTH_TOKEN_PATH
            );
            debug!(token_url = %token_url, "Resolved Salesforce credentials");
            Ok(Credentials::new(client_id, client_secret, token_url))
        }
        _ => {
            let missing = [
                (CLIENT_ID_VAR, client_id.is_none()),
                (CLIENT_SECRET_VAR, client_secret.is_none()),
                (MY_DOMAIN_URL_VAR, my_domain_url.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name.to_string())
            .collect();

            Err(Error::new(ErrorKind::Configuration { missing }))
        }
    }
}
