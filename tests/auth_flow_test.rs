mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{response_json, TestApp, ADMIN_PHONE};
use marketplace_api::auth::OtpPurpose;

const PHONE: &str = "+15551230000";

#[tokio::test]
async fn login_issues_code_and_verify_creates_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/auth/login",
            Some(json!({ "phoneNumber": PHONE })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "OTP sent successfully");

    // no user record yet before verification
    assert!(app.find_user_by_phone(PHONE).await.is_none());

    // replace the delivered code with a known one
    let code = app.issue_otp(OtpPurpose::Login, PHONE);
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": PHONE, "otp": code })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Login successful");
    let token = body["data"]["token"].as_str().expect("token").to_string();
    assert_eq!(body["data"]["tokenType"], "Bearer");
    // not onboarded yet, so no user payload
    assert!(body["data"].get("user").is_none());

    let user = app.find_user_by_phone(PHONE).await.expect("user created");
    assert_eq!(user.role.as_str(), "user");

    let response = app
        .request(Method::GET, "/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["phoneNumber"], PHONE);
    assert_eq!(body["data"]["isOnboarded"], false);
}

#[tokio::test]
async fn bootstrap_phone_becomes_admin() {
    let app = TestApp::new().await;

    let code = app.issue_otp(OtpPurpose::Login, ADMIN_PHONE);
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": ADMIN_PHONE, "otp": code })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = app
        .find_user_by_phone(ADMIN_PHONE)
        .await
        .expect("admin exists");
    assert_eq!(user.role.as_str(), "admin");
}

#[tokio::test]
async fn wrong_code_is_rejected_and_consumed_after_retries() {
    let app = TestApp::new().await;

    let code = app.issue_otp(OtpPurpose::Login, PHONE);
    let wrong = if code == "000000" { "111111" } else { "000000" };
    for _ in 0..5 {
        let response = app
            .request(
                Method::POST,
                "/auth/verify-login",
                Some(json!({ "phoneNumber": PHONE, "otp": wrong })),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // attempt limit reached, even the right code no longer works
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": PHONE, "otp": code })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.find_user_by_phone(PHONE).await.is_none());
}

#[tokio::test]
async fn onboarding_flow_verifies_business_email() {
    let app = TestApp::new().await;

    let code = app.issue_otp(OtpPurpose::Login, PHONE);
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": PHONE, "otp": code })),
            None,
        )
        .await;
    let token = response_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/auth/onboard",
            Some(json!({
                "name": "Jordan Appleseed",
                "businessEmail": "jordan@acme.test",
                "companyName": "Acme",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let code = app.issue_otp(OtpPurpose::Onboarding, "jordan@acme.test");
    let response = app
        .request(
            Method::POST,
            "/auth/onboard-verify",
            Some(json!({ "otp": code })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["isOnboarded"], true);
    assert_eq!(body["data"]["businessEmailVerified"], true);
    assert_eq!(body["data"]["companyName"], "Acme");

    // a later login now returns the user alongside the token
    let code = app.issue_otp(OtpPurpose::Login, PHONE);
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": PHONE, "otp": code })),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["user"]["isOnboarded"], true);
}

#[tokio::test]
async fn business_email_must_be_unique() {
    let app = TestApp::new().await;

    let first_token = {
        let code = app.issue_otp(OtpPurpose::Login, PHONE);
        let response = app
            .request(
                Method::POST,
                "/auth/verify-login",
                Some(json!({ "phoneNumber": PHONE, "otp": code })),
                None,
            )
            .await;
        response_json(response).await["data"]["token"]
            .as_str()
            .unwrap()
            .to_string()
    };
    app.request(
        Method::POST,
        "/auth/onboard",
        Some(json!({ "name": "First", "businessEmail": "shared@acme.test" })),
        Some(&first_token),
    )
    .await;

    let other_phone = "+15557654321";
    let code = app.issue_otp(OtpPurpose::Login, other_phone);
    let response = app
        .request(
            Method::POST,
            "/auth/verify-login",
            Some(json!({ "phoneNumber": other_phone, "otp": code })),
            None,
        )
        .await;
    let second_token = response_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/auth/onboard",
            Some(json!({ "name": "Second", "businessEmail": "shared@acme.test" })),
            Some(&second_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Business email already exists");
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = TestApp::new().await;
    let token = app.admin_token().to_string();

    let response = app
        .request(Method::GET, "/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::POST, "/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Successfully logged out");

    let response = app
        .request(Method::GET, "/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_auth_routes_reject_anonymous_calls() {
    let app = TestApp::new().await;

    for uri in ["/auth/me"] {
        let response = app.request(Method::GET, uri, None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    for uri in ["/auth/onboard", "/auth/onboard-verify", "/auth/logout"] {
        let response = app
            .request(Method::POST, uri, Some(json!({})), None)
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
