mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{response_json, TestApp};

async fn seed_section(app: &TestApp, name: &str, slug: &str) -> String {
    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(json!({
                "name": name,
                "slug": slug,
                "type": "AI_LIKE",
                "priority": 1,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["data"]["id"]
        .as_str()
        .expect("section id")
        .to_string()
}

async fn create_category(app: &TestApp, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .request_as_admin(Method::POST, "/api/v1/category", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn level_is_derived_from_parent() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "AI", "ai").await;

    let root = create_category(
        &app,
        json!({
            "name": "Chatbots",
            "slug": "chatbots",
            "sectionId": section_id,
        }),
    )
    .await;
    assert_eq!(root["data"]["level"], 0);
    assert!(root["data"]["parent"].is_null());
    assert_eq!(root["data"]["section"]["slug"], "ai");
    let root_id = root["data"]["id"].as_str().unwrap().to_string();

    let child = create_category(
        &app,
        json!({
            "name": "Support Bots",
            "slug": "support-bots",
            "parentId": root_id,
            "sectionId": section_id,
        }),
    )
    .await;
    assert_eq!(child["data"]["level"], 1);
    assert_eq!(child["data"]["parent"]["slug"], "chatbots");
}

#[tokio::test]
async fn children_length_counts_direct_children() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "AI", "ai").await;

    let root = create_category(
        &app,
        json!({ "name": "Root", "slug": "root", "sectionId": section_id }),
    )
    .await;
    let root_id = root["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(root["data"]["childrenLength"], 0);

    for i in 0..3 {
        create_category(
            &app,
            json!({
                "name": format!("Child {i}"),
                "slug": format!("child-{i}"),
                "parentId": root_id,
            }),
        )
        .await;
    }

    let response = app
        .request(Method::GET, &format!("/api/v1/category/{root_id}"), None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["childrenLength"], 3);

    // children report no grandchildren
    let response = app
        .request(Method::GET, "/api/v1/category/slug/child-0", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["childrenLength"], 0);
    assert_eq!(body["data"]["level"], 1);
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let app = TestApp::new().await;

    create_category(&app, json!({ "name": "Dup", "slug": "dup-1" })).await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/category",
            Some(json!({ "name": "Dup", "slug": "dup-2" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Category already exists");
}

#[tokio::test]
async fn list_filters_by_level_parent_and_section() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "AI", "ai").await;

    let root = create_category(
        &app,
        json!({ "name": "Root", "slug": "root", "sectionId": section_id }),
    )
    .await;
    let root_id = root["data"]["id"].as_str().unwrap().to_string();
    create_category(
        &app,
        json!({ "name": "Kid A", "slug": "kid-a", "parentId": root_id }),
    )
    .await;
    create_category(
        &app,
        json!({ "name": "Kid B", "slug": "kid-b", "parentId": root_id }),
    )
    .await;
    create_category(&app, json!({ "name": "Loose", "slug": "loose" })).await;

    let response = app
        .request(Method::GET, "/api/v1/category?level=0", None, None)
        .await;
    assert_eq!(response_json(response).await["data"]["total"], 2);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/category?parentId={root_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response_json(response).await["data"]["total"], 2);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/category?sectionId={section_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response_json(response).await["data"]["total"], 1);

    let response = app
        .request(Method::GET, "/api/v1/category?keyword=KID", None, None)
        .await;
    assert_eq!(response_json(response).await["data"]["total"], 2);
}

#[tokio::test]
async fn update_rederives_level() {
    let app = TestApp::new().await;

    let root = create_category(&app, json!({ "name": "Root", "slug": "root" })).await;
    let root_id = root["data"]["id"].as_str().unwrap().to_string();
    let child = create_category(
        &app,
        json!({ "name": "Child", "slug": "child", "parentId": root_id }),
    )
    .await;
    let child_id = child["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(child["data"]["level"], 1);

    // detaching from the parent promotes the category to the root level
    let response = app
        .request_as_admin(
            Method::PUT,
            &format!("/api/v1/category/{child_id}"),
            Some(json!({ "name": "Child", "slug": "child" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["level"], 0);
    assert!(body["data"]["parent"].is_null());
}

#[tokio::test]
async fn delete_missing_category_returns_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request_as_admin(
            Method::DELETE,
            "/api/v1/category/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn deleting_parent_detaches_children() {
    let app = TestApp::new().await;

    let root = create_category(&app, json!({ "name": "Root", "slug": "root" })).await;
    let root_id = root["data"]["id"].as_str().unwrap().to_string();
    let child = create_category(
        &app,
        json!({ "name": "Child", "slug": "child", "parentId": root_id }),
    )
    .await;
    let child_id = child["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request_as_admin(Method::DELETE, &format!("/api/v1/category/{root_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // child survives; its parent link is cleared but level is untouched
    let response = app
        .request(Method::GET, &format!("/api/v1/category/{child_id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["data"]["parent"].is_null());
}
