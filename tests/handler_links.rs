mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use short_links::application::services::Claims;
use short_links::domain::repositories::LinkRepository;

async fn create(server: &TestServer, original: &str) -> Value {
    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer(&common::valid_token()))
        .json(&json!({ "original": original }))
        .await;

    assert_eq!(response.status_code(), 201);
    response.json::<Value>()
}

#[tokio::test]
async fn test_create_link_success() {
    let (server, repository) = common::create_test_server();

    let json = create(&server, "https://example.com/some/page").await;

    assert_eq!(json["message"], "Link created successfully");

    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["url"], format!("{}/{}", common::BASE_URL, code));

    let stored = repository.find_by_code(code).await.unwrap().unwrap();
    assert_eq!(stored.original, "https://example.com/some/page");
    assert_eq!(stored.clicks, 0);
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, repository) = common::create_test_server();

    for original in ["not a url", "ftp://example.com/file", "http://localhost"] {
        let response = server
            .post("/links")
            .add_header("Authorization", common::bearer(&common::valid_token()))
            .json(&json!({ "original": original }))
            .await;

        assert_eq!(response.status_code(), 400, "{original}");
        assert_eq!(response.json::<Value>()["message"], "Invalid URL");
    }

    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_missing_original() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer(&common::valid_token()))
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["code"], "validation_error");
    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_non_json_body() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer(&common::valid_token()))
        .text("original=https://example.com")
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_link_without_token() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "original": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert_eq!(response.json::<Value>()["code"], "unauthorized");
    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_wrong_secret() {
    let (server, repository) = common::create_test_server();

    let token = common::sign(
        &Claims {
            sub: None,
            iat: None,
            exp: None,
        },
        "not-the-secret",
    );

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "original": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_expired_token() {
    let (server, _) = common::create_test_server();

    let token = common::sign(
        &Claims {
            sub: Some("operator".to_string()),
            iat: Some(common::now() - 7200),
            exp: Some(common::now() - 3600),
        },
        common::SECRET,
    );

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "original": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_create_link_non_bearer_scheme() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/links")
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .json(&json!({ "original": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_list_links() {
    let (server, _) = common::create_test_server();

    let first = create(&server, "https://one.example.com").await;
    let second = create(&server, "https://two.example.com/path").await;

    let response = server
        .get("/links/all")
        .add_header("Authorization", common::bearer(&common::valid_token()))
        .await;

    assert_eq!(response.status_code(), 200);

    let json = response.json::<Value>();
    let links = json.as_array().unwrap();
    assert_eq!(links.len(), 2);

    assert_eq!(links[0]["shortCode"], first["shortCode"]);
    assert_eq!(links[0]["original"], "https://one.example.com");
    assert_eq!(links[0]["clicks"], 0);
    assert!(links[0]["createdAt"].is_string());

    assert_eq!(links[1]["shortCode"], second["shortCode"]);
    assert_ne!(links[0]["shortCode"], links[1]["shortCode"]);
}

#[tokio::test]
async fn test_list_links_empty() {
    let (server, _) = common::create_test_server();

    let response = server
        .get("/links/all")
        .add_header("Authorization", common::bearer(&common::valid_token()))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_links_without_token() {
    let (server, _) = common::create_test_server();

    let response = server.get("/links/all").await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_same_url_twice_gets_two_codes() {
    let (server, _) = common::create_test_server();

    let first = create(&server, "https://example.com").await;
    let second = create(&server, "https://example.com").await;

    assert_ne!(first["shortCode"], second["shortCode"]);
}
