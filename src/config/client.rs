//
//  powertoys-client
//  config/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Connection Configuration
//!
//! [`ClientConfig`] holds everything a [`PowertoysClient`](crate::api::PowertoysClient)
//! needs to reach the licensing service: the bearer token, the API version and
//! the base address, plus transport settings. It is immutable once handed to
//! a client.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use powertoys_client::config::ClientConfig;
//!
//! let config = ClientConfig::new("my-token")
//!     .api_version(2)
//!     .base_address("https://licensing.example.com/api")
//!     .timeout(Some(Duration::from_secs(10)));
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.versioned_base(), "https://licensing.example.com/api/v2");
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::api::ApiError;

/// The public endpoint of the licensing service.
pub const DEFAULT_BASE_ADDRESS: &str = "https://powertoys.io/api";

/// The API version used when none is given.
pub const DEFAULT_API_VERSION: u32 = 1;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The `Content-Type` label sent with form-encoded request bodies.
///
/// The body bytes are always `application/x-www-form-urlencoded`; only the
/// header differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyContentType {
    /// `application/x-www-form-urlencoded`
    #[default]
    Form,
    /// `application/json`, as older deployments of the service expect
    LegacyJson,
}

impl BodyContentType {
    /// Returns the header value for this content type.
    pub fn header_value(self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::LegacyJson => "application/json",
        }
    }
}

/// Connection configuration for the licensing API.
///
/// # Fields
///
/// | Field | Default |
/// |-------|---------|
/// | `access_token` | required |
/// | `api_version` | `1` |
/// | `base_address` | `https://powertoys.io/api` |
/// | `timeout` | 30 seconds |
/// | `fail_on_error` | `true` |
/// | `body_content_type` | [`BodyContentType::Form`] |
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    access_token: String,
    api_version: u32,
    base_address: String,
    timeout: Option<Duration>,
    fail_on_error: bool,
    body_content_type: BodyContentType,
}

impl ClientConfig {
    /// Creates a configuration with default settings for the given token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION,
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            fail_on_error: true,
            body_content_type: BodyContentType::default(),
        }
    }

    /// Sets the API version (the `v{n}` path segment).
    pub fn api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Overrides the base address. A trailing slash is ignored.
    pub fn base_address(mut self, address: impl Into<String>) -> Self {
        self.base_address = address.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout. `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets strict-fail mode.
    ///
    /// When enabled, any non-2xx response is reported as
    /// [`ApiError::Transport`]. When disabled, the body of a non-2xx response
    /// is decoded and returned like a successful one.
    pub fn fail_on_error(mut self, enabled: bool) -> Self {
        self.fail_on_error = enabled;
        self
    }

    /// Sets the `Content-Type` label used for request bodies.
    pub fn body_content_type(mut self, content_type: BodyContentType) -> Self {
        self.body_content_type = content_type;
        self
    }

    /// Checks the configuration before a client is built from it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if:
    /// - the access token is empty, only whitespace, or cannot be sent in
    ///   an `Authorization` header
    /// - the API version is `0`
    /// - the base address is not a valid base address (see [`validate_base_address`])
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.access_token.trim().is_empty() {
            return Err(ApiError::Configuration(
                "access token must not be empty".to_string(),
            ));
        }

        bearer_header(&self.access_token)?;

        if self.api_version == 0 {
            return Err(ApiError::Configuration(
                "API version must be a positive integer".to_string(),
            ));
        }

        validate_base_address(&self.base_address)?;
        Ok(())
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn version(&self) -> u32 {
        self.api_version
    }

    pub fn address(&self) -> &str {
        &self.base_address
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_fail_on_error(&self) -> bool {
        self.fail_on_error
    }

    pub fn content_type(&self) -> BodyContentType {
        self.body_content_type
    }

    /// Returns `{base_address}/v{api_version}`.
    pub fn versioned_base(&self) -> String {
        format!("{}/v{}", self.base_address, self.api_version)
    }
}

/// Checks that an address can serve as the API base.
///
/// The address must be an absolute `http` or `https` URL with no query
/// string or fragment, since the version and resource are appended as
/// path segments.
///
/// # Example
///
/// ```rust
/// use powertoys_client::config::validate_base_address;
///
/// assert!(validate_base_address("https://licensing.example.com/api").is_ok());
/// assert!(validate_base_address("https://licensing.example.com/api?tenant=a").is_err());
/// ```
pub fn validate_base_address(address: &str) -> Result<Url, ApiError> {
    let url = Url::parse(address).map_err(|e| {
        ApiError::Configuration(format!("invalid base address '{}': {}", address, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Configuration(format!(
            "base address must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ApiError::Configuration(format!(
            "base address '{}' must not carry a query string or fragment",
            address
        )));
    }

    Ok(url)
}

/// Builds the `Authorization: Bearer` header value for a token.
///
/// The value is marked sensitive so it is never printed by `Debug`.
pub fn bearer_header(access_token: &str) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", access_token)).map_err(|_| {
        ApiError::Configuration("access token contains invalid characters".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

// The token stays out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("base_address", &self.base_address)
            .field("timeout", &self.timeout)
            .field("fail_on_error", &self.fail_on_error)
            .field("body_content_type", &self.body_content_type)
            .finish()
    }
}
