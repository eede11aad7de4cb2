//
//  powertoys-client
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use powertoys_client::config::ClientConfig;
use powertoys_client::PowertoysClient;

pub const TOKEN: &str = "test-token";
pub const BEARER: &str = "Bearer test-token";

/// A client pointed at a mock server, API v1.
pub fn client_for(server: &mockito::ServerGuard) -> PowertoysClient {
    PowertoysClient::new(TOKEN, 1, Some(&server.url())).unwrap()
}

/// A client built from a config whose base address is the mock server.
pub fn client_with(
    server: &mockito::ServerGuard,
    configure: impl FnOnce(ClientConfig) -> ClientConfig,
) -> PowertoysClient {
    let config = configure(ClientConfig::new(TOKEN).base_address(server.url()));
    PowertoysClient::from_config(config).unwrap()
}
