//
//  powertoys-client
//  tests/client_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use powertoys_client::config::{BodyContentType, ClientConfig};
use powertoys_client::{ApiError, ApiResult, PowertoysClient};
use serde_json::json;

use common::{client_for, client_with, BEARER, TOKEN};

// ── Construction ────────────────────────────────────────────────

#[test]
fn empty_token_is_configuration_error() {
    let err = PowertoysClient::new("", 1, None).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[test]
fn invalid_base_address_is_configuration_error() {
    let err = PowertoysClient::new(TOKEN, 1, Some("powertoys.io/api")).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[test]
fn base_address_with_query_is_configuration_error() {
    let err = PowertoysClient::new(TOKEN, 2, Some("https://x.test/api?tenant=a")).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));

    let err = PowertoysClient::new(TOKEN, 2, Some("https://x.test/api#licences")).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[tokio::test]
async fn token_unfit_for_header_fails_at_construction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

    let err = PowertoysClient::new("tok\n", 1, Some(&server.url())).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_token_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

    assert!(PowertoysClient::new("  ", 1, Some(&server.url())).is_err());

    mock.assert_async().await;
}

// ── URLs ────────────────────────────────────────────────────────

#[tokio::test]
async fn base_address_and_version_shape_every_url() {
    let mut server = mockito::Server::new_async().await;
    let licences = server
        .mock("GET", "/api/v3/licenses/1")
        .with_body("{}")
        .create_async()
        .await;
    let customers = server
        .mock("GET", "/api/v3/customers/2")
        .with_body("{}")
        .create_async()
        .await;

    let base = format!("{}/api/", server.url());
    let client = PowertoysClient::new(TOKEN, 3, Some(&base)).unwrap();
    client.find_licence("1").await.unwrap();
    client.find_customer("2").await.unwrap();

    licences.assert_async().await;
    customers.assert_async().await;
}

#[tokio::test]
async fn ids_are_escaped_as_a_single_segment() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/licenses/a%2Fb")
        .with_body("{}")
        .create_async()
        .await;

    client_for(&server).find_licence("a/b").await.unwrap();

    mock.assert_async().await;
}

// ── Response decoding ───────────────────────────────────────────

#[tokio::test]
async fn empty_body_is_no_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/licenses/verify-licence")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let result = client_for(&server)
        .verify_licence("PT-1", "10.0.0.1")
        .await
        .unwrap();

    assert_eq!(result, ApiResult::NoResult);
}

#[tokio::test]
async fn falsy_json_is_a_value_not_no_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/licenses/verify-licence")
        .with_status(200)
        .with_body("false")
        .create_async()
        .await;

    let result = client_for(&server)
        .verify_licence("PT-1", "10.0.0.1")
        .await
        .unwrap();

    assert_eq!(result, ApiResult::Value(json!(false)));
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/customers")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server).find_all_customers().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

// ── Status handling ─────────────────────────────────────────────

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/licenses/missing")
        .with_status(404)
        .with_body(r#"{"message":"Licence not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).find_licence("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API error (404): Licence not found");
}

#[tokio::test]
async fn unauthorized_keeps_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/v1/customers/c1")
        .with_status(401)
        .create_async()
        .await;

    let err = client_for(&server).delete_customer("c1").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport {
            status: Some(401),
            ..
        }
    ));
}

#[tokio::test]
async fn lenient_mode_returns_error_bodies() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/licenses/activate-licence")
        .with_status(422)
        .with_body(r#"{"errors":["Licence already active"]}"#)
        .create_async()
        .await;

    let client = client_with(&server, |c| c.fail_on_error(false));
    let result = client
        .activate_licence("PT-1", "10.0.0.1")
        .await
        .unwrap();

    assert_eq!(result.value().unwrap()["errors"][0], "Licence already active");
}

// ── Transport failures ──────────────────────────────────────────

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = PowertoysClient::new(TOKEN, 1, Some(&address)).unwrap();
    let err = client.find_all_licences().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { status: None, .. }));
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());

    // Accept connections and never answer.
    let stalled = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = ClientConfig::new(TOKEN)
        .base_address(address)
        .timeout(Some(Duration::from_millis(200)));
    let client = PowertoysClient::from_config(config).unwrap();

    let err = client.find_licence("1").await.unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, ApiError::Transport { status: None, .. }));
    stalled.abort();
}

// ── Headers ─────────────────────────────────────────────────────

#[tokio::test]
async fn legacy_content_type_keeps_form_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/customers/c1")
        .match_header("content-type", "application/json")
        .match_header("content-length", "10")
        .match_body(Matcher::Exact("name=Janet".to_string()))
        .with_body("{}")
        .create_async()
        .await;

    let client = client_with(&server, |c| {
        c.body_content_type(BodyContentType::LegacyJson)
    });
    let data = json!({"name": "Janet"});
    client
        .update_customer("c1", data.as_object().unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn user_agent_names_the_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/licenses")
        .match_header("user-agent", Matcher::Regex("^powertoys-client/".to_string()))
        .with_body("[]")
        .create_async()
        .await;

    client_for(&server).find_all_licences().await.unwrap();

    mock.assert_async().await;
}

// ── Concurrency ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_do_not_share_request_state() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for i in 0..8 {
        let licence = server
            .mock("GET", format!("/v1/licenses/{}", i).as_str())
            .match_header("authorization", BEARER)
            .with_body(format!(r#"{{"id":{}}}"#, i))
            .expect(1)
            .create_async()
            .await;
        let customer = server
            .mock("PUT", format!("/v1/customers/{}", i).as_str())
            .match_body(Matcher::Exact(format!("seats={}", i)))
            .with_body(format!(r#"{{"customer":{}}}"#, i))
            .expect(1)
            .create_async()
            .await;
        mocks.push(licence);
        mocks.push(customer);
    }

    let client = Arc::new(client_for(&server));
    let mut handles = Vec::new();
    for i in 0..8 {
        let licence_client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let result = licence_client.find_licence(&i.to_string()).await.unwrap();
            assert_eq!(result, ApiResult::Value(json!({"id": i})));
        }));

        let customer_client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let data = json!({"seats": i});
            let result = customer_client
                .update_customer(&i.to_string(), data.as_object().unwrap())
                .await
                .unwrap();
            assert_eq!(result, ApiResult::Value(json!({"customer": i})));
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
    for mock in mocks {
        mock.assert_async().await;
    }
}
