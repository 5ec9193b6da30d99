//! Connector configuration.
//!
//! The environment is read once, by the caller, into a [`ConnectorConfig`]
//! which is then handed to the resolver. Nothing below this module touches
//! process state.

use soql_agent_client::DEFAULT_API_VERSION;

/// Connected app consumer key.
pub const CLIENT_ID_VAR: &str = "SALESFORCE_CLIENT_ID";
/// Connected app consumer secret.
pub const CLIENT_SECRET_VAR: &str = "SALESFORCE_CLIENT_SECRET";
/// My Domain base URL, e.g. `https://acme.my.salesforce.com`.
pub const MY_DOMAIN_URL_VAR: &str = "SALESFORCE_MY_DOMAIN_URL";
/// Optional REST API version override, e.g. `v60.0` or `60.0`.
pub const API_VERSION_VAR: &str = "SALESFORCE_API_VERSION";

/// Raw connector settings, possibly incomplete.
///
/// Validation happens in [`CredentialResolver`](crate::CredentialResolver).
/// The client secret is redacted in Debug output.
#[derive(Clone, Default)]
pub struct ConnectorConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    my_domain_url: Option<String>,
    api_version: Option<String>,
}

impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("my_domain_url", &self.my_domain_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ConnectorConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables.
    ///
    /// Reads:
    /// - `SALESFORCE_CLIENT_ID`
    /// - `SALESFORCE_CLIENT_SECRET`
    /// - `SALESFORCE_MY_DOMAIN_URL`
    /// - `SALESFORCE_API_VERSION` (optional, default `59.0`)
    ///
    /// Missing variables are left unset; the resolver reports them.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            client_id: lookup(CLIENT_ID_VAR),
            client_secret: lookup(CLIENT_SECRET_VAR),
            my_domain_url: lookup(MY_DOMAIN_URL_VAR),
            api_version: lookup(API_VERSION_VAR),
        }
    }

    /// Set the client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the client secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the My Domain base URL.
    pub fn with_my_domain_url(mut self, url: impl Into<String>) -> Self {
        self.my_domain_url = Some(url.into());
        self
    }

    /// Override the REST API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// The client id exactly as configured, if set and non-blank.
    pub fn client_id(&self) -> Option<&str> {
        non_blank(&self.client_id)
    }

    /// The client secret exactly as configured, if set and non-blank.
    pub fn client_secret(&self) -> Option<&str> {
        non_blank(&self.client_secret)
    }

    /// The My Domain base URL with surrounding whitespace removed, if set
    /// and non-blank.
    pub fn my_domain_url(&self) -> Option<&str> {
        non_blank(&self.my_domain_url).map(str::trim)
    }

    /// The REST API version without a `v` prefix, falling back to the default.
    pub fn api_version(&self) -> &str {
        non_blank(&self.api_version)
            .map(|v| v.trim().trim_start_matches(['v', 'V']))
            .unwrap_or(DEFAULT_API_VERSION)
    }
}

/// The raw value, unless it is absent or whitespace only.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ConnectorConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (MY_DOMAIN_URL_VAR, "https://acme.my.salesforce.com"),
            (API_VERSION_VAR, "v60.0"),
        ]));

        assert_eq!(config.client_id(), Some("id"));
        assert_eq!(config.client_secret(), Some("secret"));
        assert_eq!(
            config.my_domain_url(),
            Some("https://acme.my.salesforce.com")
        );
        assert_eq!(config.api_version(), "60.0");
    }

    #[test]
    fn test_blank_values_read_as_unset() {
        let config = ConnectorConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, ""),
            (CLIENT_SECRET_VAR, "   "),
            (API_VERSION_VAR, ""),
        ]));

        assert_eq!(config.client_id(), None);
        assert_eq!(config.client_secret(), None);
        assert_eq!(config.my_domain_url(), None);
        assert_eq!(config.api_version(), DEFAULT_API_VERSION);
    }

    #[test]
    fn test_credentials_keep_surrounding_whitespace() {
        let config = ConnectorConfig::new()
            .with_client_id(" id")
            .with_client_secret(" sec ")
            .with_my_domain_url(" https://acme.my.salesforce.com ");

        assert_eq!(config.client_id(), Some(" id"));
        assert_eq!(config.client_secret(), Some(" sec "));
        assert_eq!(
            config.my_domain_url(),
            Some("https://acme.my.salesforce.com")
        );
    }

    #[test]
    fn test_api_version_accepts_bare_number() {
        let config = ConnectorConfig::new().with_api_version("61.0");
        assert_eq!(config.api_version(), "61.0");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ConnectorConfig::new()
            .with_client_id("visible_id")
            .with_client_secret("super_secret_value");

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("visible_id"));
        assert!(!debug_output.contains("super_secret_value"));
    }
}
