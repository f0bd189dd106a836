// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use slcli::config::{parse_endpoint, ApiConfig};
use slcli::softlayer::SoftLayerClient;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const API_PATH: &str = "/rest/v3.1";
pub const USERNAME: &str = "SL100200";
pub const API_KEY: &str = "integration-key";

/// Path of a service method on the mock server.
pub fn api_path(service: &str, method: &str) -> String {
    format!("{API_PATH}/{service}/{method}.json")
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> SoftLayerClient {
    let config = ApiConfig {
        username: USERNAME.to_string(),
        api_key: API_KEY.to_string(),
        endpoint: parse_endpoint(&format!("{}{API_PATH}", server.uri()))
            .expect("mock server uri is a valid endpoint"),
        timeout: Duration::from_secs(5),
    };
    SoftLayerClient::new(&config).expect("failed to build client")
}

/// Write `contents` to a zone file inside a fresh temp dir.
///
/// The dir must be kept alive for as long as the file is used.
pub fn write_zone_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("failed to create zone file");
    file.write_all(contents.as_bytes())
        .expect("failed to write zone file");
    (dir, path)
}

/// Zone creation succeeds with `zone_id`.
pub async fn mock_zone_created(server: &MockServer, name: &str, zone_id: i64) {
    Mock::given(method("POST"))
        .and(path(api_path("SoftLayer_Dns_Domain", "createObject")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": zone_id,
            "name": name,
        })))
        .mount(server)
        .await;
}

/// Zone creation fails as it does for a duplicate domain.
pub async fn mock_zone_duplicate(server: &MockServer, name: &str) {
    Mock::given(method("POST"))
        .and(path(api_path("SoftLayer_Dns_Domain", "createObject")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": format!("{name} already exists."),
            "code": "SoftLayer_Exception_Dns_DomainAlreadyExists",
        })))
        .mount(server)
        .await;
}

/// Lookup by name returns `zones` as `(id, name)` pairs.
pub async fn mock_zone_lookup(server: &MockServer, name: &str, zones: &[(i64, &str)]) {
    let body: Vec<Value> = zones
        .iter()
        .map(|(id, zone)| json!({ "id": id, "name": zone }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!(
            "{API_PATH}/SoftLayer_Dns_Domain/getByDomainName/{name}.json"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Every generic and SRV record creation succeeds.
pub async fn mock_records_accepted(server: &MockServer) {
    for service in [
        "SoftLayer_Dns_Domain_ResourceRecord",
        "SoftLayer_Dns_Domain_ResourceRecord_SrvType",
    ] {
        Mock::given(method("POST"))
            .and(path(api_path(service, "createObject")))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 5000 })))
            .mount(server)
            .await;
    }
}

/// The `parameters[0]` template of a recorded request.
pub fn template(request: &Request) -> Value {
    let body: Value = serde_json::from_slice(&request.body).expect("request body is JSON");
    body["parameters"][0].clone()
}

/// Templates of all POSTs to `service`, in the order they were received.
pub async fn posted_templates(server: &MockServer, service: &str) -> Vec<Value> {
    let expected = api_path(service, "createObject");
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .filter(|r| r.method.as_str() == "POST" && r.url.path() == expected)
        .map(template)
        .collect()
}
