//
//  powertoys-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # PowerToys Licensing Client
//!
//! A client library, and the `powertoys` command-line tool built on it, for
//! the PowerToys licensing REST API.
//!
//! ## Overview
//!
//! The API exposes two resources, licences and customers, under a versioned
//! base path (`https://powertoys.io/api/v1/...` by default). Every request is
//! authenticated with a bearer token, sends form-encoded bodies and answers
//! with JSON.
//!
//! ## Features
//!
//! - **Licences**: find, list, create, update, delete
//! - **Licence keys**: verify, activate and deactivate against a server address
//! - **Customers**: find, list, create, update, delete
//! - **Explicit outcomes**: empty responses are [`ApiResult::NoResult`], never errors
//! - **Shareable client**: no per-call state is stored on the client
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and resource operations
//! - [`config`]: Client configuration and the CLI config file
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use powertoys_client::{ApiResult, PowertoysClient};
//!
//! # async fn example() -> Result<(), powertoys_client::ApiError> {
//! let client = PowertoysClient::new("your-token", 1, None)?;
//!
//! match client.activate_licence("PT-1234-ABCD", "203.0.113.7").await? {
//!     ApiResult::Value(body) => println!("activated: {}", body),
//!     ApiResult::NoResult => println!("no response body"),
//! }
//! # Ok(())
//! # }
//! ```

/// API client for the licensing service.
///
/// Builds versioned resource URLs, attaches the bearer token, encodes
/// request bodies and decodes JSON responses.
pub mod api;

/// Configuration.
///
/// [`config::ClientConfig`] configures a client; [`config::Config`] is the
/// `powertoys` binary's TOML file.
pub mod config;

/// Command-line interface definitions.
pub mod cli;

/// Output formatting for the command-line interface.
pub mod output;

pub use api::{ApiError, ApiResult, PowertoysClient};
pub use config::ClientConfig;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and shell completions.
pub const APP_NAME: &str = "powertoys";

/// Application version constant, taken from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use powertoys_client::VERSION;
///
/// println!("powertoys version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes so scripts can tell failure kinds apart.
///
/// # Example
///
/// ```rust
/// use powertoys_client::exit_codes;
///
/// let err: anyhow::Error = powertoys_client::ApiError::Configuration("no token".into()).into();
/// assert_eq!(exit_codes::for_error(&err), exit_codes::CONFIG_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The client could not be configured (missing token, bad address).
    pub const CONFIG_ERROR: i32 = 3;

    /// The token was rejected (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The licence or customer does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The server's response could not be decoded.
    pub const DECODE_ERROR: i32 = 16;

    /// The request failed at the transport level or the server returned an error.
    pub const TRANSPORT_ERROR: i32 = 32;

    /// Maps an error to its exit code.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        match err.downcast_ref::<ApiError>() {
            Some(ApiError::Configuration(_)) => CONFIG_ERROR,
            Some(ApiError::Decode { .. }) => DECODE_ERROR,
            Some(e @ ApiError::Transport { .. }) => match e.status() {
                Some(401) | Some(403) => AUTH_ERROR,
                Some(404) => NOT_FOUND,
                _ => TRANSPORT_ERROR,
            },
            None => ERROR,
        }
    }
}
