//
//  powertoys-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the PowerToys Licensing API
//!
//! This module provides the error and result types shared by every licence
//! and customer operation.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ApiResult`] - Decoded response body, or the "no result" outcome
//!
//! # Example
//!
//! ```rust
//! use powertoys_client::api::common::{ApiError, ApiResult};
//!
//! fn describe(result: Result<ApiResult, ApiError>) -> String {
//!     match result {
//!         Ok(ApiResult::Value(value)) => format!("got {}", value),
//!         Ok(ApiResult::NoResult) => "empty response".to_string(),
//!         Err(ApiError::Transport { status: Some(404), .. }) => "not found".to_string(),
//!         Err(e) => format!("failed: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Unified error type for all PowerToys API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Configuration` | The client could not be constructed (missing token, bad address) |
/// | `Transport` | Network failure, timeout, or non-2xx status in strict-fail mode |
/// | `Decode` | A non-empty response body was not valid JSON |
///
/// # Notes
///
/// An empty response body is never an error; it decodes to [`ApiResult::NoResult`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client configuration is invalid.
    ///
    /// Raised before any network call is attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request could not be completed at the transport level.
    ///
    /// `status` is set when the server answered with a non-success status,
    /// and is `None` for connection failures and timeouts.
    #[error("{}", format_transport(.status, .message))]
    Transport {
        /// HTTP status returned by the server, if any
        status: Option<u16>,
        /// Human readable description of the failure
        message: String,
        /// Underlying HTTP client error, if any
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body was present but could not be decoded.
    #[error("Decode error: {message}")]
    Decode {
        /// What was being decoded
        message: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

fn format_transport(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("API error ({}): {}", code, message),
        None => format!("Transport error: {}", message),
    }
}

impl ApiError {
    /// Builds a [`ApiError::Transport`] from a non-success response.
    ///
    /// The server's own error message is extracted from the body when it is
    /// JSON in one of the shapes the service uses; otherwise the raw body is kept.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        Self::Transport {
            status: Some(status.as_u16()),
            message: extract_error_message(body).unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    body.trim().to_string()
                }
            }),
            source: None,
        }
    }

    /// Returns the HTTP status carried by a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns `true` if the server answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport { source: Some(e), .. } if e.is_timeout()
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect to server".to_string()
        } else {
            err.to_string()
        };

        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message,
            source: Some(err),
        }
    }
}

/// Extracts a human readable message from a JSON error body.
///
/// Recognised shapes:
///
/// ```json
/// {"message": "Licence not found"}
/// {"error": "Licence not found"}
/// {"error": {"message": "Licence not found"}}
/// {"errors": [{"message": "Licence not found"}]}
/// {"errors": ["Licence not found"]}
/// ```
fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;

    if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }

    match json.get("error") {
        Some(Value::String(message)) => return Some(message.clone()),
        Some(error) => {
            if let Some(message) = error.get("message").and_then(|m| m.as_str()) {
                return Some(message.to_string());
            }
        }
        None => {}
    }

    let first = json.get("errors").and_then(|e| e.as_array())?.first()?;
    first
        .as_str()
        .or_else(|| first.get("message").and_then(|m| m.as_str()))
        .map(str::to_string)
}

/// The outcome of a successful API call.
///
/// The remote API answers with JSON documents of no fixed shape, so the body
/// is kept as a generic [`serde_json::Value`]. An empty response body is a
/// valid outcome of its own and is represented by [`ApiResult::NoResult`];
/// it is never confused with a falsy JSON document such as `false` or `0`.
///
/// # Example
///
/// ```rust
/// use powertoys_client::api::ApiResult;
/// use serde_json::json;
///
/// let result = ApiResult::Value(json!({"id": "abc"}));
/// assert_eq!(result.value().and_then(|v| v["id"].as_str()), Some("abc"));
/// assert!(ApiResult::NoResult.is_no_result());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// The decoded JSON response body
    Value(Value),
    /// The server returned an empty body
    NoResult,
}

impl ApiResult {
    /// Decodes a raw response body.
    ///
    /// An empty or whitespace-only body yields [`ApiResult::NoResult`];
    /// anything else must be valid JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::NoResult);
        }

        serde_json::from_slice(body)
            .map(Self::Value)
            .map_err(|source| ApiError::Decode {
                message: "response body is not valid JSON".to_string(),
                source,
            })
    }

    /// Returns `true` if the server returned an empty body.
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult)
    }

    /// Borrows the decoded value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::NoResult => None,
        }
    }

    /// Consumes the result, returning the decoded value if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::NoResult => None,
        }
    }

    /// Deserializes the decoded value into a concrete type.
    ///
    /// Returns `Ok(None)` for [`ApiResult::NoResult`] and
    /// [`ApiError::Decode`] if the value does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Value(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| ApiError::Decode {
                    message: format!("response does not match {}", std::any::type_name::<T>()),
                    source,
                }),
            Self::NoResult => Ok(None),
        }
    }
}
