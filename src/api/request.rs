//
//  powertoys-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Construction
//!
//! Every API call builds its own [`RequestDescriptor`]: the HTTP method, the
//! fully qualified URL, the headers and the optional form-encoded body. The
//! descriptor is a plain value owned by the call, so concurrent calls on one
//! client never share request state.
//!
//! ## URL Layout
//!
//! ```text
//! {base_address}/v{api_version}/{resource}[/{id}][/{action}]
//! ```
//!
//! ## Body Encoding
//!
//! Bodies are `application/x-www-form-urlencoded`. Nested values are
//! flattened with bracket notation, the way PHP's `http_build_query` does:
//!
//! ```rust
//! use powertoys_client::api::FormBody;
//! use serde_json::json;
//!
//! let data = json!({"name": "Jane Doe", "address": {"city": "Cluj"}, "vip": true});
//! let body = FormBody::from_value(&data);
//! assert_eq!(body.encode(), "address%5Bcity%5D=Cluj&name=Jane+Doe&vip=1");
//! ```

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use url::form_urlencoded;
use url::Url;

use super::ApiError;
use crate::config::{bearer_header, validate_base_address, ClientConfig};

/// Resource kinds exposed by the licensing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Licences, at `/licenses`
    License,
    /// Customers, at `/customers`
    Customer,
}

impl Resource {
    /// Returns the path segment for this resource.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::License => "licenses",
            Self::Customer => "customers",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Licence key actions, each posted to `/licenses/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenceAction {
    Verify,
    Activate,
    Deactivate,
}

impl LicenceAction {
    /// Returns the path segment for this action.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Verify => "verify-licence",
            Self::Activate => "activate-licence",
            Self::Deactivate => "deactivate-licence",
        }
    }
}

impl fmt::Display for LicenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// An ordered list of form fields.
///
/// Field order is kept as inserted; [`FormBody::from_map`] inserts in the
/// map's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Builds a body from a caller-supplied mapping.
    ///
    /// | JSON value | Encoded as |
    /// |------------|------------|
    /// | string | the string |
    /// | number | its decimal text |
    /// | `true` / `false` | `1` / `0` |
    /// | `null` | omitted |
    /// | object | `key[sub]=..` per entry |
    /// | array | `key[0]=..` per element |
    pub fn from_map(data: &Map<String, Value>) -> Self {
        let mut fields = Vec::new();
        for (key, value) in data {
            flatten_into(key.clone(), value, &mut fields);
        }
        Self { fields }
    }

    /// Builds a body from any JSON value.
    ///
    /// Objects behave like [`FormBody::from_map`]; a top-level array uses the
    /// element indices as keys; a scalar produces an empty body.
    pub fn from_value(data: &Value) -> Self {
        match data {
            Value::Object(map) => Self::from_map(map),
            Value::Array(items) => {
                let mut fields = Vec::new();
                for (index, item) in items.iter().enumerate() {
                    flatten_into(index.to_string(), item, &mut fields);
                }
                Self { fields }
            }
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Percent-escapes and joins the fields: `k1=v1&k2=v2`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

fn flatten_into(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{}[{}]", key, index), item, out);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                flatten_into(format!("{}[{}]", key, sub), item, out);
            }
        }
    }
}

/// A single, fully prepared API request.
///
/// Built fresh for every call and consumed when the request is sent.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Fully qualified request URL
    pub url: Url,
    /// Authorization and, for bodies, content headers
    pub headers: HeaderMap,
    /// Form-encoded body, if any
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Builds the descriptor for a call.
    ///
    /// `segments` are appended after the resource segment and percent-escaped
    /// as path segments, so ids containing `/` or spaces stay in one segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base address cannot carry a
    /// path, has a query or fragment, or the token cannot be sent as a
    /// header value.
    pub fn build(
        config: &ClientConfig,
        method: Method,
        resource: Resource,
        segments: &[&str],
        body: Option<FormBody>,
    ) -> Result<Self, ApiError> {
        let mut url = validate_base_address(config.address())?;
        let version = format!("v{}", config.version());

        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Configuration(format!(
                    "base address '{}' cannot be used as a base URL",
                    config.address()
                ))
            })?
            .pop_if_empty()
            .push(&version)
            .push(resource.path_segment())
            .extend(segments);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_header(config.access_token())?);

        let body = body.map(|b| b.encode());
        if let Some(encoded) = &body {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(config.content_type().header_value()),
            );
            headers.insert(CONTENT_LENGTH, HeaderValue::from(encoded.len()));
        }

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }
}
