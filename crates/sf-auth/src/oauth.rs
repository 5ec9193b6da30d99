//! OAuth 2.0 client-credentials flow.
//!
//! One POST to the token endpoint per call. No caching, no refresh, no retry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use soql_agent_client::{ClientConfig, ResponseExt, SfHttpClient};
use tracing::{info, instrument};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};

/// Performs the client-credentials token exchange.
#[derive(Debug, Clone)]
pub struct ClientCredentialsFlow {
    http: SfHttpClient,
}

impl ClientCredentialsFlow {
    /// Create a flow over an existing HTTP client.
    pub fn new(http: SfHttpClient) -> Self {
        Self { http }
    }

    /// Create a flow with its own HTTP client built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = SfHttpClient::new(config).map_err(transport_error)?;
        Ok(Self::new(http))
    }

    /// Create a flow with the default HTTP configuration.
    pub fn default_client() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Exchange `credentials` for an access token.
    ///
    /// The credentials are not logged.
    ///
    /// # Errors
    ///
    /// Every failure is [`ErrorKind::Authentication`]:
    /// - the endpoint answered with a non-2xx status (the sanitized body is
    ///   kept, and an OAuth error document becomes the message)
    /// - the request could not be sent
    /// - the body is not JSON, or lacks `access_token` / `instance_url`
    #[instrument(skip(self, credentials), fields(token_url = %credentials.token_url()))]
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
        ];

        let request = self
            .http
            .post(credentials.token_url())
            .header("Accept", "application/json")
            .form(&form)
            .map_err(transport_error)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(transport_error)?
            .error_for_status()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let raw: RawTokenResponse = response.json().await.map_err(|e| {
            let message = format!("token response is not valid JSON: {e}");
            Error::absorbing(
                ErrorKind::Authentication {
                    status: Some(status),
                    message,
                    body: None,
                },
                e,
            )
        })?;

        let token = raw.into_token_response(status)?;
        info!(instance_url = %token.instance_url, "Access token acquired");
        Ok(token)
    }
}

/// Exchange `credentials` for an access token using a default HTTP client.
pub async fn acquire_token(credentials: &Credentials) -> Result<TokenResponse> {
    ClientCredentialsFlow::default_client()?
        .acquire_token(credentials)
        .await
}

/// Convert a transport failure into an authentication error.
fn transport_error(err: soql_agent_client::Error) -> Error {
    let status = err.status();
    let body = err.body().map(str::to_string);
    let message = match body.as_deref().and_then(oauth_error_message) {
        Some(message) => message,
        None if status.is_some() => "token endpoint rejected the request".to_string(),
        None => err.to_string(),
    };

    Error::absorbing(
        ErrorKind::Authentication {
            status,
            message,
            body,
        },
        err,
    )
}

/// `error - error_description` from an OAuth error document, if `body` is one.
fn oauth_error_message(body: &str) -> Option<String> {
    let error: OAuthErrorResponse = serde_json::from_str(body).ok()?;
    Some(match error.error_description {
        Some(description) if !description.is_empty() => {
            format!("{} - {}", error.error, description)
        }
        _ => error.error,
    })
}

/// Token response from the client-credentials exchange.
///
/// Sensitive fields like `access_token` and `signature` are redacted in
/// Debug output to prevent accidental exposure in logs.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Instance URL that API calls must target.
    pub instance_url: String,
    /// Identity URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Scopes granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Signature for verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Issued at, milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

impl TokenResponse {
    /// Create a token response with only the required fields.
    pub fn new(access_token: impl Into<String>, instance_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            instance_url: instance_url.into(),
            id: None,
            token_type: None,
            scope: None,
            signature: None,
            issued_at: None,
        }
    }

    /// `issued_at` as a timestamp, when present and well-formed.
    pub fn issued_at_time(&self) -> Option<DateTime<Utc>> {
        let millis: i64 = self.issued_at.as_deref()?.parse().ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

/// Token document as sent by the provider, before required fields are checked.
#[derive(Deserialize)]
struct RawTokenResponse {
    access_token: Option<String>,
    instance_url: Option<String>,
    id: Option<String>,
    token_type: Option<String>,
    scope: Option<String>,
    signature: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    issued_at: Option<String>,
}

impl RawTokenResponse {
    fn into_token_response(self, status: u16) -> Result<TokenResponse> {
        let missing = |field: &str| {
            Error::new(ErrorKind::Authentication {
                status: Some(status),
                message: format!("token response is missing `{field}`"),
                body: None,
            })
        };

        let access_token = self
            .access_token
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing("access_token"))?;
        let instance_url = self
            .instance_url
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing("instance_url"))?;

        Ok(TokenResponse {
            access_token,
            instance_url,
            id: self.id,
            token_type: self.token_type,
            scope: self.scope,
            signature: self.signature,
            issued_at: self.issued_at,
        })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}
