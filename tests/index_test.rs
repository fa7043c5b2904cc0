use reqwest::{Client, StatusCode};

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn root_serves_the_index_page() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"]
        .to_str()
        .expect("content type should be ascii")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Cannot read response body.");
    let on_disk = std::fs::read_to_string("index.html").expect("index.html should exist");
    assert_eq!(body, on_disk);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/teams", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.expect("Cannot parse error body.");
    assert_eq!(body["success"], false);
}
