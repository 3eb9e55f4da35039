//! Tests for the delete_telemetry command
//!
//! The whole login → device lookup → deletion sequence runs against a
//! mocked ThingsBoard instance.

use httpmock::prelude::*;
use serde_json::json;
use telemetry_cleaner::commands::delete_telemetry::{self, DeleteRequest};
use telemetry_cleaner::{Error, TbConfig, ThingsBoardClient};

const DEVICE_UUID: &str = "784f394c-42b6-435a-983c-b7beff2784f9";

fn client_for(server: &MockServer) -> ThingsBoardClient {
    let config = TbConfig {
        base_url: server.base_url(),
        username: "tenant@thingsboard.org".to_string(),
        password: "secret".to_string(),
    };
    ThingsBoardClient::new(config).expect("client")
}

fn request<'a>() -> DeleteRequest<'a> {
    DeleteRequest {
        device_name: "20090231",
        start_date: "03/06/2021",
        start_time: "00:00",
        end_date: "23/06/2021",
        end_time: "23:59",
        dry_run: false,
    }
}

fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login").json_body(json!({
            "username": "tenant@thingsboard.org",
            "password": "secret"
        }));
        then.status(200)
            .json_body(json!({ "token": "jwt-token", "refreshToken": "r" }));
    })
}

fn mock_device(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/tenant/devices")
            .query_param("deviceName", "20090231")
            .header("X-Authorization", "Bearer jwt-token");
        then.status(200).json_body(json!({
            "id": { "entityType": "DEVICE", "id": DEVICE_UUID },
            "name": "20090231",
            "type": "default"
        }));
    })
}

fn mock_delete(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(DELETE)
            .path(format!(
                "/api/plugins/telemetry/DEVICE/{}/timeseries/delete",
                DEVICE_UUID
            ))
            .query_param("startTs", "1622678400000")
            .query_param("endTs", "1624492740000")
            .query_param("rewriteLatestIfDeleted", "true")
            .header("X-Authorization", "Bearer jwt-token");
        then.status(200);
    })
}

#[tokio::test]
async fn full_run_issues_one_delete_with_computed_bounds() {
    let server = MockServer::start_async().await;
    let login = mock_login(&server);
    let device = mock_device(&server);
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let outcome = delete_telemetry::run(&client, request()).await.unwrap();

    assert!(outcome.deleted);
    assert_eq!(outcome.device_id.to_string(), DEVICE_UUID);
    assert_eq!(outcome.window.start_ms, 1_622_678_400_000);
    assert_eq!(outcome.window.end_ms, 1_624_492_740_000);

    login.assert_calls(1);
    device.assert_calls(1);
    delete.assert_calls(1);
}

#[tokio::test]
async fn login_failure_stops_before_any_further_call() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({ "message": "Invalid username or password" }));
    });
    let device = mock_device(&server);
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let err = delete_telemetry::run(&client, request()).await.unwrap_err();

    assert!(matches!(err, Error::LoginFailed(_)));
    device.assert_calls(0);
    delete.assert_calls(0);
}

#[tokio::test]
async fn missing_device_id_stops_before_deletion() {
    let server = MockServer::start_async().await;
    let login = mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/tenant/devices");
        then.status(200).json_body(json!({ "name": "20090231" }));
    });
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let err = delete_telemetry::run(&client, request()).await.unwrap_err();

    assert!(matches!(err, Error::DeviceNotFound(_)));
    assert!(err.to_string().contains("20090231"));
    login.assert_calls(1);
    delete.assert_calls(0);
}

#[tokio::test]
async fn malformed_date_stops_before_deletion() {
    let server = MockServer::start_async().await;
    let login = mock_login(&server);
    let device = mock_device(&server);
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let err = delete_telemetry::run(
        &client,
        DeleteRequest {
            start_date: "31/13/2021",
            ..request()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::InvalidDateTime(_)));
    login.assert_calls(1);
    device.assert_calls(1);
    delete.assert_calls(0);
}

#[tokio::test]
async fn inverted_range_is_rejected_before_deletion() {
    let server = MockServer::start_async().await;
    let _login = mock_login(&server);
    let _device = mock_device(&server);
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let err = delete_telemetry::run(
        &client,
        DeleteRequest {
            start_date: "23/06/2021",
            end_date: "03/06/2021",
            ..request()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    delete.assert_calls(0);
}

#[tokio::test]
async fn dry_run_resolves_everything_but_never_deletes() {
    let server = MockServer::start_async().await;
    let login = mock_login(&server);
    let device = mock_device(&server);
    let delete = mock_delete(&server);

    let client = client_for(&server);
    let outcome = delete_telemetry::run(
        &client,
        DeleteRequest {
            dry_run: true,
            ..request()
        },
    )
    .await
    .unwrap();

    assert!(!outcome.deleted);
    assert_eq!(outcome.device_id.to_string(), DEVICE_UUID);
    login.assert_calls(1);
    device.assert_calls(1);
    delete.assert_calls(0);
}
