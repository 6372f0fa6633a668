use axum::{extract::State, http::HeaderMap, response::Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{message_response, success_response, validate_input};
use crate::auth::{bearer_token, AuthUser, OtpError, OtpPurpose};
use crate::entities::user::{self, UserRole};
use crate::errors::{ApiError, ServiceError};
use crate::services::users::OnboardInput;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    #[validate(length(min = 8, message = "Valid phone number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyLoginBody {
    #[validate(length(min = 8, message = "Valid phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 6, max = 6, message = "Verification code must be 6 digits"))]
    pub otp: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardBody {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid business email is required"))]
    pub business_email: String,
    pub company_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardVerifyBody {
    #[validate(length(min = 6, max = 6, message = "Verification code must be 6 digits"))]
    pub otp: String,
}

/// User projection returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub business_email: Option<String>,
    pub business_email_verified: bool,
    pub company_name: Option<String>,
    pub image: Option<String>,
    pub role: UserRole,
    pub is_onboarded: bool,
    pub is_oauth: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user::Model> for UserDto {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone_number: model.phone_number,
            business_email: model.business_email,
            business_email_verified: model.business_email_verified,
            company_name: model.company_name,
            image: model.image,
            role: model.role,
            is_onboarded: model.is_onboarded,
            is_oauth: model.is_oauth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

fn otp_error(err: OtpError) -> ApiError {
    ApiError::ServiceError(ServiceError::Unauthorized(err.to_string()))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginBody,
    responses((status = 200, description = "Verification code sent")),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<LoginBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;

    let code = state.otp.issue(OtpPurpose::Login, &body.phone_number);
    // SMS delivery is out of scope; the log line stands in for the gateway
    info!(phone = %body.phone_number, code = %code, "login verification code issued");

    Ok(message_response("OTP sent successfully"))
}

#[utoipa::path(
    post,
    path = "/auth/verify-login",
    request_body = VerifyLoginBody,
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Verification failed")
    ),
    tag = "Auth"
)]
pub async fn verify_login(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<VerifyLoginBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;

    state
        .otp
        .verify(OtpPurpose::Login, &body.phone_number, &body.otp)
        .map_err(otp_error)?;

    let admin_phones = state.config.admin_phones();
    let user = state
        .services
        .users
        .get_or_create_by_phone(&body.phone_number, &admin_phones)
        .await?;

    let issued = state
        .auth
        .generate_token(&user)
        .map_err(|e| ApiError::ServiceError(ServiceError::InternalError(e.to_string())))?;

    let data = LoginData {
        token: issued.token,
        token_type: issued.token_type,
        expires_in: issued.expires_in,
        user: user.is_onboarded.then(|| UserDto::from(user)),
    };

    Ok(success_response("Login successful", data))
}

#[utoipa::path(
    post,
    path = "/auth/onboard",
    request_body = OnboardBody,
    responses(
        (status = 200, description = "Verification code sent to business email"),
        (status = 409, description = "Business email already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn onboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
    axum::Json(body): axum::Json<OnboardBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;

    let updated = state
        .services
        .users
        .onboard(
            auth_user.user_id,
            OnboardInput {
                name: body.name,
                business_email: body.business_email,
                company_name: body.company_name,
            },
        )
        .await?;

    let email = updated.business_email.as_deref().unwrap_or_default();
    let code = state.otp.issue(OtpPurpose::Onboarding, email);
    // Email delivery is out of scope; the log line stands in for the gateway
    info!(email = %email, code = %code, "onboarding verification code issued");

    Ok(message_response("Verification code sent to business email"))
}

#[utoipa::path(
    post,
    path = "/auth/onboard-verify",
    request_body = OnboardVerifyBody,
    responses(
        (status = 200, description = "Onboarding completed"),
        (status = 401, description = "Verification failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn onboard_verify(
    State(state): State<AppState>,
    auth_user: AuthUser,
    axum::Json(body): axum::Json<OnboardVerifyBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;

    let user = state.services.users.get_by_id(auth_user.user_id).await?;
    let email = user.business_email.as_deref().ok_or_else(|| {
        ApiError::BadRequest("No business email on file; submit onboarding details first".into())
    })?;

    state
        .otp
        .verify(OtpPurpose::Onboarding, email, &body.otp)
        .map_err(otp_error)?;

    let updated = state.services.users.mark_onboarded(user.id).await?;

    Ok(success_response(
        "Onboarding completed successfully",
        UserDto::from(updated),
    ))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current user"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> Result<Response, ApiError> {
    let user = state.services.users.get_by_id(auth_user.user_id).await?;
    Ok(success_response(
        "User fetched successfully",
        UserDto::from(user),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)
        .map_err(|_| ApiError::Unauthorized)?;
    state
        .auth
        .revoke_token(token)
        .map_err(|_| ApiError::Unauthorized)?;

    Ok(message_response("Successfully logged out"))
}
