//! Mock API tests for the cloudconnexa library.
//!
//! These tests use wiremock to simulate the CloudConnexa API and exercise
//! the token lifecycle, response classification, and list normalization
//! without network access or real credentials.

use cloudconnexa::{ApiVersion, CloudConnexaClient, Credentials, Error};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("test-client", "test-secret")
}

/// Helper to build a client pinned to v1.0 against a mock server.
fn client_for(server: &MockServer) -> CloudConnexaClient {
    CloudConnexaClient::new(server.uri(), credentials(), ApiVersion::V1_0).unwrap()
}

/// Mount a token endpoint answering the client-credentials grant.
async fn mount_token_endpoint(server: &MockServer, token: &str, expires_in: u64, expect: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": expires_in
        })))
        .expect(expect)
        .mount(server)
        .await;
}

// ============================================================================
// Token Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_acquires_token_and_sends_bearer_header() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.networks().list().await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(client.token().await.as_deref(), Some("test-token"));
}

#[tokio::test]
async fn test_valid_token_triggers_no_further_token_calls() {
    let server = MockServer::start().await;
    // The token endpoint must be hit exactly once across several requests.
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for _ in 0..3 {
        client.networks().list().await.unwrap();
    }
}

#[tokio::test]
async fn test_stale_token_refresh_failure_falls_back_to_acquisition() {
    let server = MockServer::start().await;

    // First acquisition hands out a token already inside the 30s safety
    // buffer, so the next request sees it as stale.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "stale-token",
            "expires_in": 5
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // The refresh attempt is rejected; this must not surface to the caller.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=stale-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "invalid_grant"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Fallback full acquisition succeeds with a fresh token.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.authenticate().await);
    assert_eq!(client.token().await.as_deref(), Some("stale-token"));

    // The request succeeds despite the failed refresh, and the token is
    // replaced by the fallback acquisition.
    client.networks().list().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("fresh-token"));
}

#[tokio::test]
async fn test_acquisition_failure_is_fail_fast() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "invalid_client"}
        })))
        .mount(&server)
        .await;

    // No API request may be attempted without a token.
    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.networks().list().await.unwrap_err();
    match err {
        Error::Authentication { status, body, .. } => {
            assert_eq!(status, Some(401));
            assert!(body.unwrap().contains("invalid_client"));
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
    assert!(!client.authenticate().await);
}

// ============================================================================
// Response Classification Tests
// ============================================================================

#[tokio::test]
async fn test_404_carries_trailing_path_segment_as_resource_id() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.networks().get("abc").await.unwrap_err();
    match err {
        Error::NotFound { ref resource_id, .. } => {
            assert_eq!(resource_id, "abc");
            assert_eq!(err.status_code(), Some(404));
        }
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_429_retry_after_from_header() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/users"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "60")
                .set_body_json(json!({"error": {"code": "rate_limited"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.users().list().await.unwrap_err();
    assert!(matches!(err, Error::RateLimit { retry_after: Some(60) }));
}

#[tokio::test]
async fn test_429_body_retry_after_wins_over_header() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/users"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "60")
                .set_body_json(json!({"error": {"retry_after": 30}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.users().list().await.unwrap_err();
    assert!(matches!(err, Error::RateLimit { retry_after: Some(30) }));
}

#[tokio::test]
async fn test_400_surfaces_structured_details() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Validation failed",
                "details": {"name": ["Name is already taken"]}
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let create = cloudconnexa::services::NetworkCreate {
        name: "dup".to_string(),
        ..Default::default()
    };
    let err = client.networks().create(&create).await.unwrap_err();
    match err {
        Error::Validation { message, details } => {
            assert_eq!(message, "Validation failed");
            assert_eq!(details.unwrap()["name"][0], "Name is already taken");
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generic_error_message_from_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"message": "maintenance in progress"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.networks().list().await.unwrap_err();
    match err {
        Error::Api { message, status, .. } => {
            assert_eq!(message, "maintenance in progress");
            assert_eq!(status, Some(503));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_accepts_204_without_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1.0/networks/net-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.networks().delete("net-1").await.unwrap();
}

// ============================================================================
// List Normalization Tests
// ============================================================================

#[tokio::test]
async fn test_empty_list_normalizes_to_empty_page() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.networks().list().await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 0);
    assert!(!page.pagination.has_more);
}

#[tokio::test]
async fn test_bare_array_synthesizes_pagination() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "net-1", "name": "office", "created_at": "2024-01-15T10:30:00Z"},
            {"id": "net-2", "name": "lab"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.networks().list().await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.pagination.per_page, 2);
    assert!(!page.pagination.has_more);
    assert!(page.data[0].created_at.as_ref().unwrap().as_datetime().is_some());
}

#[tokio::test]
async fn test_paginated_object_merges_partial_metadata() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "u-1", "email": "alice@example.com"}],
            "pagination": {"total": 12, "has_more": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.users().list().await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total, 12);
    assert!(page.pagination.has_more);
    // Fields the upstream omitted come from the synthesized defaults.
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 1);
}

// ============================================================================
// Version Detection Tests
// ============================================================================

#[tokio::test]
async fn test_connect_detects_v1_1_0() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1.1.0/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.1.0"})))
        .mount(&server)
        .await;

    let client = CloudConnexaClient::connect(server.uri(), credentials())
        .await
        .unwrap();
    assert_eq!(client.api_version(), ApiVersion::V1_1_0);
}

#[tokio::test]
async fn test_connect_falls_back_to_v1_0_when_probe_rejected() {
    // No version mock mounted: the probe gets the server's default 404.
    let server = MockServer::start().await;

    let client = CloudConnexaClient::connect(server.uri(), credentials())
        .await
        .unwrap();
    assert_eq!(client.api_version(), ApiVersion::V1_0);
}

#[tokio::test]
async fn test_connect_falls_back_to_v1_0_on_transport_error() {
    // Nothing listens here; the probe fails at the connection level.
    let client = CloudConnexaClient::connect("http://127.0.0.1:9", credentials())
        .await
        .unwrap();
    assert_eq!(client.api_version(), ApiVersion::V1_0);
}

// ============================================================================
// Nested Resource Tests
// ============================================================================

#[tokio::test]
async fn test_dns_records_are_network_scoped() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks/net-1/dns-records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "rec-1", "name": "printer.internal", "type": "A", "value": "10.0.0.8"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.dns().list("net-1").await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].record_type, "A");
}

#[tokio::test]
async fn test_nested_404_uses_record_id_not_network_id() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "test-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v1.0/networks/net-1/dns-records/rec-9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.dns().get("net-1", "rec-9").await.unwrap_err();
    match err {
        Error::NotFound { resource_id, .. } => assert_eq!(resource_id, "rec-9"),
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

// ============================================================================
// Client-Side Validation Tests
// ============================================================================

#[tokio::test]
async fn test_create_network_with_empty_name_never_hits_the_wire() {
    let server = MockServer::start().await;

    // Neither the token endpoint nor the API may be called.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let create = cloudconnexa::services::NetworkCreate::default();
    let err = client.networks().create(&create).await.unwrap_err();
    match err {
        Error::Validation { details, .. } => {
            assert_eq!(details.unwrap()["name"][0], "Name cannot be empty");
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}
