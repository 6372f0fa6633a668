mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{response_json, TestApp};

fn section_body(name: &str, slug: &str, section_type: &str, priority: i32) -> serde_json::Value {
    json!({
        "name": name,
        "slug": slug,
        "type": section_type,
        "priority": priority,
    })
}

#[tokio::test]
async fn create_and_fetch_section() {
    let app = TestApp::new().await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body("AI Tools", "ai-tools", "AI_LIKE", 1)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Section created successfully");
    assert_eq!(body["data"]["name"], "AI Tools");
    assert_eq!(body["data"]["type"], "AI_LIKE");
    let id = body["data"]["id"].as_str().expect("section id").to_string();

    // readable without a token
    let response = app
        .request(Method::GET, &format!("/api/v1/section/{id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, "/api/v1/section/slug/ai-tools", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["id"], id.as_str());
}

#[tokio::test]
async fn duplicate_section_name_conflicts() {
    let app = TestApp::new().await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body("Cloud", "cloud", "CLOUD", 1)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body("Cloud", "cloud-2", "CLOUD", 2)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Section already exists");
}

#[tokio::test]
async fn update_rejects_name_of_another_section() {
    let app = TestApp::new().await;

    app.request_as_admin(
        Method::POST,
        "/api/v1/section",
        Some(section_body("Software", "software", "SOFTWARE", 1)),
    )
    .await;
    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body("Hardware", "hardware", "NETWORK_HARDWARE", 2)),
        )
        .await;
    let id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("section id")
        .to_string();

    // renaming to itself is fine
    let response = app
        .request_as_admin(
            Method::PUT,
            &format!("/api/v1/section/{id}"),
            Some(section_body("Hardware", "hardware", "NETWORK_HARDWARE", 5)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["priority"], 5);

    // taking another section's name is not
    let response = app
        .request_as_admin(
            Method::PUT,
            &format!("/api/v1/section/{id}"),
            Some(section_body("Software", "hardware", "NETWORK_HARDWARE", 5)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_sections_paginates_and_filters() {
    let app = TestApp::new().await;

    for i in 0..5 {
        app.request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body(
                &format!("Cloud Provider {i}"),
                &format!("cloud-provider-{i}"),
                "CLOUD",
                i,
            )),
        )
        .await;
    }
    app.request_as_admin(
        Method::POST,
        "/api/v1/section",
        Some(section_body("Dev Software", "dev-software", "SOFTWARE", 9)),
    )
    .await;

    let response = app
        .request(Method::GET, "/api/v1/section?page=1&pageSize=2", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let data = &body["data"];
    assert_eq!(data["total"], 6);
    assert_eq!(data["page"], 1);
    assert_eq!(data["pageSize"], 2);
    assert_eq!(data["totalPages"], 3);
    assert_eq!(data["content"].as_array().unwrap().len(), 2);

    // type filter
    let response = app
        .request(Method::GET, "/api/v1/section?type=SOFTWARE", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["content"][0]["slug"], "dev-software");

    // keyword is case-insensitive
    let response = app
        .request(Method::GET, "/api/v1/section?keyword=cloud", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 5);

    // limit is accepted as a pageSize alias
    let response = app
        .request(Method::GET, "/api/v1/section?limit=3", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["pageSize"], 3);
    assert_eq!(body["data"]["totalPages"], 2);
}

#[tokio::test]
async fn empty_list_has_zero_total_pages() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/section", None, None).await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["totalPages"], 0);
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn writes_require_admin_role() {
    let app = TestApp::new().await;
    let body = section_body("Gated", "gated", "CLOUD", 1);

    let response = app
        .request(Method::POST, "/api/v1/section", Some(body.clone()), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let user_token = app.user_token().await;
    let response = app
        .request(
            Method::POST,
            "/api/v1/section",
            Some(body),
            Some(&user_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_section_detaches_but_keeps_products() {
    let app = TestApp::new().await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(section_body("Doomed", "doomed", "CLOUD", 1)),
        )
        .await;
    let section_id = response_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "Survivor",
                "slug": "survivor",
                "sectionId": section_id,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_as_admin(Method::DELETE, &format!("/api/v1/section/{section_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("/api/v1/section/{section_id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // the product survives with its section reference cleared
    let response = app
        .request(Method::GET, "/api/v1/product/slug/survivor", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["data"]["section"].is_null());
}
