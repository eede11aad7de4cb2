//
//  powertoys-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the PowerToys licensing REST API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication, request execution and decoding
//! - [`request`]: Resource kinds, URL building and form-encoded bodies
//! - [`licences`]: Licence CRUD and key actions
//! - [`customers`]: Customer CRUD
//! - [`common`]: Shared error and result types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use powertoys_client::api::PowertoysClient;
//!
//! # async fn example() -> Result<(), powertoys_client::api::ApiError> {
//! let client = PowertoysClient::new("your-token", 1, None)?;
//!
//! let licences = client.find_all_licences().await?;
//! let customer = client.find_customer("cus_81f2").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<ApiResult, ApiError>`:
//!
//! - `Configuration`: the client could not be built
//! - `Transport`: connection failure, timeout, or non-2xx status
//! - `Decode`: the response body was not valid JSON
//!
//! An empty response body is not an error; it is [`ApiResult::NoResult`].

/// Core HTTP client.
pub mod client;

/// Request descriptors and body encoding.
pub mod request;

/// Licence operations.
pub mod licences;

/// Customer operations.
pub mod customers;

/// Error and result types shared by all operations.
pub mod common;

pub use client::PowertoysClient;
pub use common::{ApiError, ApiResult};
pub use request::{FormBody, LicenceAction, RequestDescriptor, Resource};
