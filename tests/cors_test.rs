use reqwest::{Client, Method, StatusCode};
use serde_json::json;

mod common;
use common::utils::spawn_app;

fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"]
        .to_str()
        .expect("methods header should be ascii");
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{} missing from {}", method, methods);
    }
    assert!(headers["access-control-allow-headers"]
        .to_str()
        .expect("headers header should be ascii")
        .contains("Content-Type"));
}

#[tokio::test]
async fn options_short_circuits_with_200() {
    let test_app = spawn_app().await;
    let client = Client::new();

    for path in ["/api/matches", "/api/matches/1", "/api/matches/1/goals", "/nowhere"] {
        let response = client
            .request(Method::OPTIONS, &format!("{}{}", &test_app.address, path))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {}", path);
        assert_cors_headers(&response);
    }
}

#[tokio::test]
async fn browser_preflight_is_accepted() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .request(Method::OPTIONS, &format!("{}/api/matches", &test_app.address))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn every_response_carries_cors_headers() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let ok = client
        .get(&format!("{}/api/matches", &test_app.address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(ok.status(), StatusCode::OK);
    assert_cors_headers(&ok);

    let not_found = client
        .get(&format!("{}/api/matches/5", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
    assert_cors_headers(&not_found);

    let bad_request = client
        .post(&format!("{}/api/matches", &test_app.address))
        .json(&json!({"homeTeam": "A"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&bad_request);
}
