//! Integration tests for the Stockroom HTTP client

use reqwest::Method;
use serde_json::json;
use stockroom_http::client::{ClientError, TypedClientBuilder};
use stockroom_http::types::{
    CreateSupplierRequest, CreatedResponse, LoginRequest, LoginResponse, ProductListResponse,
    ProductQuery,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = TypedClientBuilder::new().build_authenticated("tok");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn trailing_slash_is_trimmed_from_base_url() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn authenticated_requests_carry_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/suppliers"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("secret-token")
        .unwrap();

    let response = client.send(client.request(Method::GET, "/api/suppliers")).await;
    assert_eq!(response.unwrap().status(), 200);
}

#[tokio::test]
async fn json_body_sets_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/suppliers"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"message": "Supplier created", "id": 4})),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let body = CreateSupplierRequest {
        name: "Acme".into(),
        contact_email: Some("sales@acme.test".into()),
        phone: None,
        address: None,
    };
    let created: CreatedResponse = client
        .execute(client.request(Method::POST, "/api/suppliers").json(&body))
        .await
        .unwrap();
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn bodyless_request_sends_no_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [], "total": 0, "pages": 0, "current_page": 1
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let listing: ProductListResponse = client
        .execute(client.request(Method::GET, "/api/products"))
        .await
        .unwrap();
    assert!(listing.products.is_empty());

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert!(!received[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn product_query_params_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "3"))
        .and(query_param("q", "bolt m4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [], "total": 0, "pages": 0, "current_page": 3
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let query = ProductQuery {
        page: Some(3),
        search: Some("bolt m4".into()),
        ..Default::default()
    };
    let listing: ProductListResponse = client
        .execute(
            client
                .request(Method::GET, "/api/products")
                .query(&query.to_pairs()),
        )
        .await
        .unwrap();
    assert_eq!(listing.current_page, 3);
}

#[tokio::test]
async fn execute_maps_401_to_authentication_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let body = LoginRequest {
        username: "alice".into(),
        password: "wrong".into(),
    };
    let result: Result<LoginResponse, _> = client
        .execute(client.request(Method::POST, "/api/login").json(&body))
        .await;
    let err = result.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn send_passes_error_statuses_through_uninterpreted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/stock-value"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let response = client
        .send(client.request(Method::GET, "/api/products/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = client
        .send(client.request(Method::GET, "/api/analytics/stock-value"))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "boom");
}

#[tokio::test]
async fn public_send_passes_error_statuses_through_uninterpreted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let body = LoginRequest {
        username: "alice".into(),
        password: "wrong".into(),
    };
    let response = client
        .send(client.request(Method::POST, "/api/login").json(&body))
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
    assert_eq!(response.text().await.unwrap(), "Invalid credentials");
}

#[tokio::test]
async fn transport_failure_propagates_as_request_error() {
    // Nothing is listening here; the connection itself fails.
    let client = TypedClientBuilder::new()
        .base_url("http://127.0.0.1:1")
        .build_authenticated("tok")
        .unwrap();

    let result = client.send(client.request(Method::GET, "/api/products")).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}
