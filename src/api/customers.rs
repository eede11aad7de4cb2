//
//  powertoys-client
//  api/customers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customer operations, all under `/v{n}/customers`.

use reqwest::Method;
use serde_json::{Map, Value};

use super::request::{FormBody, Resource};
use super::{ApiError, ApiResult, PowertoysClient};

impl PowertoysClient {
    /// Fetches a single customer.
    pub async fn find_customer(&self, id: &str) -> Result<ApiResult, ApiError> {
        self.call(Method::GET, Resource::Customer, &[id], None).await
    }

    /// Lists all customers visible to the token.
    pub async fn find_all_customers(&self) -> Result<ApiResult, ApiError> {
        self.call(Method::GET, Resource::Customer, &[], None).await
    }

    /// Creates a customer from caller-supplied fields.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use powertoys_client::api::PowertoysClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), powertoys_client::api::ApiError> {
    /// let client = PowertoysClient::new("your-token", 1, None)?;
    /// let data = json!({"name": "Jane Doe", "email": "jane@example.com"});
    /// let customer = client
    ///     .create_customer(data.as_object().expect("object literal"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_customer(&self, data: &Map<String, Value>) -> Result<ApiResult, ApiError> {
        self.call(
            Method::POST,
            Resource::Customer,
            &[],
            Some(FormBody::from_map(data)),
        )
        .await
    }

    /// Updates a customer with caller-supplied fields.
    pub async fn update_customer(
        &self,
        id: &str,
        data: &Map<String, Value>,
    ) -> Result<ApiResult, ApiError> {
        self.call(
            Method::PUT,
            Resource::Customer,
            &[id],
            Some(FormBody::from_map(data)),
        )
        .await
    }

    /// Deletes a customer.
    pub async fn delete_customer(&self, id: &str) -> Result<ApiResult, ApiError> {
        self.call(Method::DELETE, Resource::Customer, &[id], None)
            .await
    }
}
