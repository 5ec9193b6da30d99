//! # soql-agent-client
//!
//! HTTP transport shared by the SOQL agent crates.
//!
//! This crate provides the foundational HTTP client with:
//! - Configurable request and connect timeouts
//! - Compressed responses (gzip, deflate)
//! - Request/response tracing
//! - Sanitized error bodies for non-success responses
//!
//! Requests are sent exactly once. There is no retry or backoff layer: every
//! failure is handed back to the caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sf-auth token exchange, sf-rest query executor)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Raw HTTP with timeouts and compression                   │
//! │  - Request building (bearer auth, form bodies)              │
//! │  - Response handling                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use soql_agent_client::{ClientConfig, ResponseExt, SfHttpClient};
//!
//! let client = SfHttpClient::new(ClientConfig::default())?;
//! let response = client
//!     .execute(client.get("https://example.my.salesforce.com/services/data").bearer_auth(token))
//!     .await?
//!     .error_for_status()
//!     .await?;
//! let versions: serde_json::Value = response.json().await?;
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{sanitize_error_body, Response, ResponseExt};

/// Default Salesforce REST API version used for the query endpoint.
pub const DEFAULT_API_VERSION: &str = "59.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("salesforce-soql-agent/", env!("CARGO_PKG_VERSION"));
