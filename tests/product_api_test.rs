mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{response_json, TestApp};

async fn seed_section(app: &TestApp, name: &str, slug: &str, section_type: &str) -> String {
    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/section",
            Some(json!({
                "name": name,
                "slug": slug,
                "type": section_type,
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

#[tokio::test]
async fn ai_product_keeps_only_matching_details() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "AI", "ai", "AI_LIKE").await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "ChatAssist",
                "slug": "chat-assist",
                "sectionId": section_id,
                "aiProductDetails": {
                    "rating": 4.5,
                    "reviewCount": 12,
                    "tagline1": "Answers fast",
                    "showBookDemo": true,
                    "bookDemo": { "text": "Book a demo", "link": "https://example.com/demo" }
                },
                // wrong for an AI_LIKE section, must be dropped
                "datacenterCloudDetails": {
                    "type": "CLOUD",
                    "features": ["ignored"]
                }
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let data = &body["data"];

    assert_eq!(data["section"]["type"], "AI_LIKE");
    assert_eq!(data["aiProductDetails"]["rating"], 4.5);
    assert_eq!(data["aiProductDetails"]["reviewCount"], 12);
    assert_eq!(
        data["aiProductDetails"]["bookDemo"]["text"],
        "Book a demo"
    );
    assert!(data.get("datacenterCloudDetails").is_none());
}

#[tokio::test]
async fn software_plans_are_replaced_wholesale() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "Software", "software", "SOFTWARE").await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "PlannerPro",
                "slug": "planner-pro",
                "sectionId": section_id,
                "softwareDetails": {
                    "viewLink": "https://example.com/planner",
                    "softwarePlans": [
                        { "name": "Basic", "priority": 1, "features": ["one seat"] },
                        { "name": "Team", "priority": 2, "features": ["five seats"] }
                    ]
                }
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let plans = body["data"]["softwareDetails"]["softwarePlans"]
        .as_array()
        .expect("plans array");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["name"], "Basic");

    // updating with a single plan leaves exactly that plan
    let response = app
        .request_as_admin(
            Method::PUT,
            &format!("/api/v1/product/{id}"),
            Some(json!({
                "name": "PlannerPro",
                "slug": "planner-pro",
                "sectionId": section_id,
                "softwareDetails": {
                    "viewLink": "https://example.com/planner",
                    "softwarePlans": [
                        { "name": "Enterprise", "priority": 1, "features": ["unlimited"] }
                    ]
                }
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let plans = body["data"]["softwareDetails"]["softwarePlans"]
        .as_array()
        .expect("plans array");
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["name"], "Enterprise");
}

#[tokio::test]
async fn pricing_requires_opt_in() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "Cloud", "cloud", "CLOUD").await;

    let pricing = json!({
        "isStartingPrice": true,
        "price": "49.99",
        "currency": "USD",
        "btnText": "Buy now"
    });

    // pricing payload without the flag is ignored
    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "NoPrice",
                "slug": "no-price",
                "sectionId": section_id,
                "pricing": pricing,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert!(body["data"].get("pricing").is_none());

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "Priced",
                "slug": "priced",
                "sectionId": section_id,
                "hasPricing": true,
                "pricing": pricing,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["data"]["pricing"]["currency"], "USD");
    assert_eq!(body["data"]["pricing"]["isStartingPrice"], true);
}

#[tokio::test]
async fn create_against_missing_section_fails() {
    let app = TestApp::new().await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "Orphan",
                "slug": "orphan",
                "sectionId": "00000000-0000-0000-0000-000000000000",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Section not found");
}

#[tokio::test]
async fn list_enforces_page_size_cap() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/v1/product?pageSize=101", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Only 100 products can be fetched at a time");

    // exactly at the cap is fine
    let response = app
        .request(Method::GET, "/api/v1/product?pageSize=100", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn keyword_matches_name_or_description() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "AI", "ai", "AI_LIKE").await;

    for (name, slug, description) in [
        ("Transcriber", "transcriber", "Converts speech to text"),
        ("Summarizer", "summarizer", "Shortens long TEXT documents"),
        ("Painter", "painter", "Generates images"),
    ] {
        let response = app
            .request_as_admin(
                Method::POST,
                "/api/v1/product",
                Some(json!({
                    "name": name,
                    "slug": slug,
                    "sectionId": section_id,
                    "description": description,
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request(Method::GET, "/api/v1/product?keyword=text", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 2);

    let response = app
        .request(Method::GET, "/api/v1/product?keyword=PAINT", None, None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["content"][0]["slug"], "painter");
}

#[tokio::test]
async fn delete_removes_product_and_attachments() {
    let app = TestApp::new().await;
    let section_id = seed_section(&app, "Hardware", "hardware", "NETWORK_HARDWARE").await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "Switch",
                "slug": "switch",
                "sectionId": section_id,
                "networkHardwareDetails": {
                    "model": "SW-48",
                    "features": ["48 ports"]
                },
                "engagementBlock": {
                    "showForm": true,
                    "formDetails": { "title": "Contact us", "embedType": "LINK" }
                }
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["networkHardwareDetails"]["model"], "SW-48");
    assert_eq!(body["data"]["engagementBlock"]["showForm"], true);

    let response = app
        .request_as_admin(Method::DELETE, &format!("/api/v1/product/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("/api/v1/product/{id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request_as_admin(Method::DELETE, &format!("/api/v1/product/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_by_section_and_category() {
    let app = TestApp::new().await;
    let ai_section = seed_section(&app, "AI", "ai", "AI_LIKE").await;
    let cloud_section = seed_section(&app, "Cloud", "cloud", "CLOUD").await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/category",
            Some(json!({ "name": "Bots", "slug": "bots", "sectionId": ai_section })),
        )
        .await;
    let category_id = response_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    app.request_as_admin(
        Method::POST,
        "/api/v1/product",
        Some(json!({
            "name": "Bot One",
            "slug": "bot-one",
            "sectionId": ai_section,
            "categoryId": category_id,
        })),
    )
    .await;
    app.request_as_admin(
        Method::POST,
        "/api/v1/product",
        Some(json!({
            "name": "VM Host",
            "slug": "vm-host",
            "sectionId": cloud_section,
        })),
    )
    .await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/product?sectionId={ai_section}"),
            None,
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["content"][0]["slug"], "bot-one");
    assert_eq!(body["data"]["content"][0]["category"]["slug"], "bots");

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/product?categoryId={category_id}"),
            None,
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn update_switches_detail_record_with_section() {
    let app = TestApp::new().await;
    let ai_section = seed_section(&app, "AI", "ai", "AI_LIKE").await;
    let sw_section = seed_section(&app, "Software", "software", "SOFTWARE").await;

    let response = app
        .request_as_admin(
            Method::POST,
            "/api/v1/product",
            Some(json!({
                "name": "Morph",
                "slug": "morph",
                "sectionId": ai_section,
                "aiProductDetails": { "rating": 3.0 }
            })),
        )
        .await;
    let id = response_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // moving to a SOFTWARE section: the AI payload is no longer accepted
    let response = app
        .request_as_admin(
            Method::PUT,
            &format!("/api/v1/product/{id}"),
            Some(json!({
                "name": "Morph",
                "slug": "morph",
                "sectionId": sw_section,
                "aiProductDetails": { "rating": 5.0 },
                "softwareDetails": { "softwarePlans": [] }
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["section"]["type"], "SOFTWARE");
    assert!(body["data"]["softwareDetails"].is_object());
    // the stale AI row still reflects the original write, not the ignored payload
    assert_eq!(body["data"]["aiProductDetails"]["rating"], 3.0);
}
