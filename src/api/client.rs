//
//  powertoys-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the PowerToys Licensing API
//!
//! This module provides the core HTTP client for the licensing service.
//! It handles URL construction, bearer authentication, form-encoded request
//! bodies and JSON response decoding.
//!
//! ## Features
//!
//! - Versioned resource URLs (`{base}/v{version}/{resource}`)
//! - Bearer token on every request
//! - Form-encoded bodies for POST and PUT
//! - Empty responses reported as [`ApiResult::NoResult`]
//! - Configurable timeout and strict-fail mode
//! - Custom User-Agent header
//!
//! The resource operations themselves live in [`licences`](super::licences)
//! and [`customers`](super::customers).

use reqwest::{Client, Method};
use tracing::{debug, warn};

use super::request::{FormBody, RequestDescriptor, Resource};
use super::{ApiError, ApiResult};
use crate::config::ClientConfig;

/// The main HTTP client for the licensing API.
///
/// The client holds only its immutable configuration and a connection-pooled
/// [`reqwest::Client`]. Every call builds and consumes its own
/// [`RequestDescriptor`], so one client can be shared across tasks
/// (for example behind an `Arc`) and called concurrently.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use powertoys_client::api::PowertoysClient;
///
/// // Default endpoint, API v1
/// let client = PowertoysClient::new("your-token", 1, None)?;
///
/// // Self-hosted endpoint
/// let client = PowertoysClient::new("your-token", 2, Some("https://licensing.example.com/api"))?;
/// # Ok::<(), powertoys_client::api::ApiError>(())
/// ```
///
/// # Making Calls
///
/// ```rust,no_run
/// use powertoys_client::api::{ApiResult, PowertoysClient};
///
/// # async fn example() -> Result<(), powertoys_client::api::ApiError> {
/// let client = PowertoysClient::new("your-token", 1, None)?;
///
/// match client.verify_licence("PT-1234-ABCD", "203.0.113.7").await? {
///     ApiResult::Value(body) => println!("verified: {}", body),
///     ApiResult::NoResult => println!("server returned no body"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PowertoysClient {
    /// The underlying HTTP client
    http: Client,
    /// Immutable connection configuration
    config: ClientConfig,
}

impl PowertoysClient {
    /// Creates a client for the given token, API version and base address.
    ///
    /// `base_address` falls back to `https://powertoys.io/api` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the token is empty, the version
    /// is `0`, or the base address is not a valid http(s) URL. No network
    /// call is made.
    pub fn new(
        access_token: &str,
        api_version: u32,
        base_address: Option<&str>,
    ) -> Result<Self, ApiError> {
        let mut config = ClientConfig::new(access_token).api_version(api_version);
        if let Some(address) = base_address {
            config = config.base_address(address);
        }
        Self::from_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use powertoys_client::api::PowertoysClient;
    /// use powertoys_client::config::{BodyContentType, ClientConfig};
    ///
    /// let config = ClientConfig::new("your-token")
    ///     .timeout(Some(Duration::from_secs(5)))
    ///     .body_content_type(BodyContentType::LegacyJson);
    ///
    /// let client = PowertoysClient::from_config(config)?;
    /// # Ok::<(), powertoys_client::api::ApiError>(())
    /// ```
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(format!("powertoys-client/{}", crate::VERSION));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the versioned base URL for a resource kind.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use powertoys_client::api::{PowertoysClient, Resource};
    ///
    /// let client = PowertoysClient::new("your-token", 1, None)?;
    /// assert_eq!(client.resource_url(Resource::License), "https://powertoys.io/api/v1/licenses");
    /// # Ok::<(), powertoys_client::api::ApiError>(())
    /// ```
    pub fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.config.versioned_base(), resource.path_segment())
    }

    /// Builds the descriptor for a call without sending it.
    pub fn prepare(
        &self,
        method: Method,
        resource: Resource,
        segments: &[&str],
        body: Option<FormBody>,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::build(&self.config, method, resource, segments, body)
    }

    /// Builds, sends and decodes one request.
    ///
    /// This is the single path every resource operation goes through.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] on connection failure, timeout, or a non-2xx
    ///   status while strict-fail mode is on
    /// - [`ApiError::Decode`] if a non-empty body is not valid JSON
    pub(crate) async fn call(
        &self,
        method: Method,
        resource: Resource,
        segments: &[&str],
        body: Option<FormBody>,
    ) -> Result<ApiResult, ApiError> {
        let descriptor = self.prepare(method, resource, segments, body)?;
        self.execute(descriptor).await
    }

    /// Sends a prepared request and decodes its response.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<ApiResult, ApiError> {
        let RequestDescriptor {
            method,
            url,
            headers,
            body,
        } = descriptor;

        debug!(
            "{} {} (body: {} bytes)",
            method,
            url,
            body.as_ref().map_or(0, String::len)
        );

        let mut request = self.http.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("{} {} -> {} ({} bytes)", method, url, status, bytes.len());

        if !status.is_success() {
            warn!("{} {} returned {}", method, url, status);
            if self.config.is_fail_on_error() {
                return Err(ApiError::from_status(status, &String::from_utf8_lossy(&bytes)));
            }
        }

        ApiResult::from_body(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_address() {
        let client = PowertoysClient::new("tok", 1, None).unwrap();
        assert_eq!(client.config().address(), "https://powertoys.io/api");
        assert_eq!(
            client.resource_url(Resource::Customer),
            "https://powertoys.io/api/v1/customers"
        );
    }

    #[test]
    fn test_new_with_address_override() {
        let client = PowertoysClient::new("tok", 2, Some("http://127.0.0.1:9000/api")).unwrap();
        assert_eq!(
            client.resource_url(Resource::License),
            "http://127.0.0.1:9000/api/v2/licenses"
        );
    }

    #[test]
    fn test_empty_token_fails_before_network() {
        let err = PowertoysClient::new("", 1, None).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_prepare_does_not_touch_client_state() {
        let client = PowertoysClient::new("tok", 1, None).unwrap();
        let a = client.prepare(Method::GET, Resource::License, &["1"], None).unwrap();
        let b = client.prepare(Method::GET, Resource::Customer, &["2"], None).unwrap();
        assert_eq!(a.url.path(), "/api/v1/licenses/1");
        assert_eq!(b.url.path(), "/api/v1/customers/2");
    }
}
