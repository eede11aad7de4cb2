//
//  powertoys-client
//  api/licences.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Licence Operations
//!
//! CRUD for licences plus the three key actions (verify, activate,
//! deactivate) that bind a licence key to a server address.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`find_licence`](PowertoysClient::find_licence) | GET | `/v{n}/licenses/{id}` |
//! | [`find_all_licences`](PowertoysClient::find_all_licences) | GET | `/v{n}/licenses` |
//! | [`create_licence`](PowertoysClient::create_licence) | POST | `/v{n}/licenses` |
//! | [`update_licence`](PowertoysClient::update_licence) | PUT | `/v{n}/licenses/{id}` |
//! | [`delete_licence`](PowertoysClient::delete_licence) | DELETE | `/v{n}/licenses/{id}` |
//! | [`verify_licence`](PowertoysClient::verify_licence) | POST | `/v{n}/licenses/verify-licence` |
//! | [`activate_licence`](PowertoysClient::activate_licence) | POST | `/v{n}/licenses/activate-licence` |
//! | [`deactivate_licence`](PowertoysClient::deactivate_licence) | POST | `/v{n}/licenses/deactivate-licence` |

use reqwest::Method;
use serde_json::{Map, Value};

use super::request::{FormBody, LicenceAction, Resource};
use super::{ApiError, ApiResult, PowertoysClient};

impl PowertoysClient {
    /// Fetches a single licence.
    pub async fn find_licence(&self, id: &str) -> Result<ApiResult, ApiError> {
        self.call(Method::GET, Resource::License, &[id], None).await
    }

    /// Lists all licences visible to the token.
    pub async fn find_all_licences(&self) -> Result<ApiResult, ApiError> {
        self.call(Method::GET, Resource::License, &[], None).await
    }

    /// Creates a licence for a customer on a server.
    ///
    /// Sends `customer_uid`, `licence_type` and `server_address`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use powertoys_client::api::PowertoysClient;
    ///
    /// # async fn example() -> Result<(), powertoys_client::api::ApiError> {
    /// let client = PowertoysClient::new("your-token", 1, None)?;
    /// let licence = client.create_licence("cus_81f2", "yearly", "203.0.113.7").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_licence(
        &self,
        customer_id: &str,
        licence_type: &str,
        server_address: &str,
    ) -> Result<ApiResult, ApiError> {
        let body = FormBody::new()
            .field("customer_uid", customer_id)
            .field("licence_type", licence_type)
            .field("server_address", server_address);

        self.call(Method::POST, Resource::License, &[], Some(body))
            .await
    }

    /// Updates a licence with caller-supplied fields.
    pub async fn update_licence(
        &self,
        id: &str,
        data: &Map<String, Value>,
    ) -> Result<ApiResult, ApiError> {
        self.call(
            Method::PUT,
            Resource::License,
            &[id],
            Some(FormBody::from_map(data)),
        )
        .await
    }

    /// Deletes a licence.
    pub async fn delete_licence(&self, id: &str) -> Result<ApiResult, ApiError> {
        self.call(Method::DELETE, Resource::License, &[id], None)
            .await
    }

    /// Checks whether a licence key is valid for a server address.
    pub async fn verify_licence(
        &self,
        licence_key: &str,
        server_ip: &str,
    ) -> Result<ApiResult, ApiError> {
        self.licence_action(LicenceAction::Verify, licence_key, server_ip)
            .await
    }

    /// Binds a licence key to a server address.
    pub async fn activate_licence(
        &self,
        licence_key: &str,
        server_ip: &str,
    ) -> Result<ApiResult, ApiError> {
        self.licence_action(LicenceAction::Activate, licence_key, server_ip)
            .await
    }

    /// Releases a licence key from a server address.
    pub async fn deactivate_licence(
        &self,
        licence_key: &str,
        server_ip: &str,
    ) -> Result<ApiResult, ApiError> {
        self.licence_action(LicenceAction::Deactivate, licence_key, server_ip)
            .await
    }

    /// Posts `{licence_key, server_address}` to `/licenses/{action}`.
    pub async fn licence_action(
        &self,
        action: LicenceAction,
        licence_key: &str,
        server_ip: &str,
    ) -> Result<ApiResult, ApiError> {
        let body = FormBody::new()
            .field("licence_key", licence_key)
            .field("server_address", server_ip);

        self.call(
            Method::POST,
            Resource::License,
            &[action.path_segment()],
            Some(body),
        )
        .await
    }
}
