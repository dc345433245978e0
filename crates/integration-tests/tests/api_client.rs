//! `ApiClient` against a live HTTP server.

use std::net::Ipv4Addr;

use storepee_core::StoreId;
use storepee_dashboard::api::{ApiClient, ApiError, ApiRequest, ApiRoutes, Transport};
use storepee_integration_tests::TestContext;
use url::Url;

#[tokio::test]
async fn test_conflict_message_from_error_body() {
    let ctx = TestContext::new().await;
    let store = ctx.seed_store("Main Street");
    ctx.seed_billboard(store.id, "Spring Sale");

    let response = ctx
        .services
        .transport
        .send(ApiRequest::delete(ApiRoutes::store(store.id)))
        .await
        .expect("backend answered");

    assert_eq!(response.status, 409);
    match response.error_for_status() {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Store still has billboards");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_body_is_returned() {
    let ctx = TestContext::new().await;
    let request = ApiRequest::post(
        ApiRoutes::stores(),
        serde_json::json!({ "name": "Main Street" }),
    );

    let response = ctx
        .services
        .transport
        .send(request)
        .await
        .expect("backend answered")
        .error_for_status()
        .expect("store created");

    let body: serde_json::Value = response.json().expect("JSON body");
    assert_eq!(body["name"], "Main Street");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_unreachable_backend_is_request_error() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ApiClient::new(Url::parse(&format!("http://{addr}/")).expect("url"));
    let result = client
        .send(ApiRequest::delete(ApiRoutes::store(StoreId::new_v4())))
        .await;

    assert!(matches!(result, Err(ApiError::Request(_))));
}
