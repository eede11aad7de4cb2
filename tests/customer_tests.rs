//
//  powertoys-client
//  tests/customer_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use mockito::Matcher;
use powertoys_client::ApiResult;
use serde_json::json;

use common::{client_for, BEARER};

#[tokio::test]
async fn find_customer_issues_get_with_bearer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/customers/cus_81f2")
        .match_header("authorization", BEARER)
        .match_body("")
        .with_status(200)
        .with_body(r#"{"id":"cus_81f2","name":"Jane Doe"}"#)
        .create_async()
        .await;

    let result = client_for(&server).find_customer("cus_81f2").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        result,
        ApiResult::Value(json!({"id": "cus_81f2", "name": "Jane Doe"}))
    );
}

#[tokio::test]
async fn find_all_customers_issues_get_on_collection() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/customers")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(r#"{"data":[{"id":"c1"}],"total":1}"#)
        .create_async()
        .await;

    let result = client_for(&server).find_all_customers().await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.value().unwrap()["total"], 1);
}

#[tokio::test]
async fn create_customer_posts_every_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/customers")
        .match_header("authorization", BEARER)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(
            "company=Acme+%26+Co&email=jane%2Btest%40example.com&name=Jane+Doe".to_string(),
        ))
        .with_status(201)
        .with_body(r#"{"id":"c2"}"#)
        .create_async()
        .await;

    let data = json!({
        "name": "Jane Doe",
        "email": "jane+test@example.com",
        "company": "Acme & Co"
    });
    let result = client_for(&server)
        .create_customer(data.as_object().unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, ApiResult::Value(json!({"id": "c2"})));
}

#[tokio::test]
async fn create_customer_flattens_nested_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/customers")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("address[city]".into(), "Cluj".into()),
            Matcher::UrlEncoded("newsletter".into(), "0".into()),
        ]))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let data = json!({"address": {"city": "Cluj"}, "newsletter": false, "fax": null});
    client_for(&server)
        .create_customer(data.as_object().unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn update_customer_puts_caller_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/customers/c2")
        .match_header("authorization", BEARER)
        .match_body(Matcher::Exact("name=Janet".to_string()))
        .with_status(200)
        .with_body(r#"{"id":"c2","name":"Janet"}"#)
        .create_async()
        .await;

    let data = json!({"name": "Janet"});
    let result = client_for(&server)
        .update_customer("c2", data.as_object().unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.value().unwrap()["name"], "Janet");
}

#[tokio::test]
async fn delete_customer_sends_no_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/customers/c2")
        .match_header("authorization", BEARER)
        .match_header("content-type", Matcher::Missing)
        .match_body("")
        .with_status(200)
        .with_body(r#"{"deleted":true}"#)
        .create_async()
        .await;

    let result = client_for(&server).delete_customer("c2").await.unwrap();

    mock.assert_async().await;
    assert_eq!(result, ApiResult::Value(json!({"deleted": true})));
}
