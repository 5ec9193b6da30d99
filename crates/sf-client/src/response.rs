//! HTTP response handling.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Extension trait for turning non-success responses into errors.
pub trait ResponseExt {
    /// Pass 2xx responses through; otherwise consume the body and return
    /// `ErrorKind::Http` carrying the status and sanitized body.
    fn error_for_status(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn error_for_status(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let body = self.text().await.unwrap_or_default();
        Err(Error::new(ErrorKind::Http {
            status,
            body: sanitize_error_body(&body),
        }))
    }
}

static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    // Salesforce access tokens: org id ("00D..."), '!', opaque tail
    regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+").unwrap()
});

static SESSION_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").unwrap());

static ACCESS_TOKEN_FIELD: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r#""access_token"\s*:\s*"[^"]*""#).unwrap()
});

/// Sanitize an upstream body before it is placed in an error.
///
/// This function:
/// - Removes anything that looks like a Salesforce access token
/// - Removes session IDs and `access_token` JSON fields
/// - Truncates bodies longer than 500 characters
pub fn sanitize_error_body(body: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let sanitized = TOKEN_PATTERN.replace_all(body.trim(), "[REDACTED_TOKEN]");
    let sanitized = SESSION_PATTERN.replace_all(&sanitized, "sid=[REDACTED]");
    let mut sanitized = ACCESS_TOKEN_FIELD
        .replace_all(&sanitized, r#""access_token":"[REDACTED]""#)
        .into_owned();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_redacts_access_tokens() {
        let msg = "Session expired: 00Dxx0000001gEF!AQcAQH3k9s7LKbp_example_token_value.here";
        let sanitized = sanitize_error_body(msg);
        assert!(
            sanitized.contains("[REDACTED_TOKEN]"),
            "Should redact token: {sanitized}"
        );
        assert!(
            !sanitized.contains("AQcAQH3k9s7LKbp"),
            "Should not contain token value: {sanitized}"
        );
    }

    #[test]
    fn test_sanitize_redacts_session_ids() {
        let msg = "Invalid session: sid=abc123def456ghi789jkl012";
        let sanitized = sanitize_error_body(msg);
        assert!(sanitized.contains("sid=[REDACTED]"));
        assert!(!sanitized.contains("abc123def456"));
    }

    #[test]
    fn test_sanitize_redacts_access_token_field() {
        let msg = r#"{"access_token": "opaque-value", "error": "weird"}"#;
        let sanitized = sanitize_error_body(msg);
        assert!(!sanitized.contains("opaque-value"), "{sanitized}");
        assert!(sanitized.contains("\"error\": \"weird\""));
    }

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let long_msg = "x".repeat(600);
        let sanitized = sanitize_error_body(&long_msg);
        assert!(sanitized.len() < 600, "len={}", sanitized.len());
        assert!(sanitized.ends_with("...[truncated]"));
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        let long_msg = "é".repeat(400);
        let sanitized = sanitize_error_body(&long_msg);
        assert!(sanitized.ends_with("...[truncated]"));
    }

    #[test]
    fn test_sanitize_passes_through_clean_bodies() {
        let msg = r#"[{"message":"unexpected token: FORM","errorCode":"MALFORMED_QUERY"}]"#;
        assert_eq!(sanitize_error_body(msg), msg);
    }
}
