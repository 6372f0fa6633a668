use crate::errors::ApiError;
use crate::services::{PageRequest, PagedResult, SortField, SortOrder};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Success envelope used by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

/// Standard success response
pub fn success_response<T: Serialize>(message: &str, data: T) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        }),
    )
        .into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(message: &str, data: T) -> Response {
    (
        StatusCode::CREATED,
        Json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        }),
    )
        .into_response()
}

/// Success response with no payload
pub fn message_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::<()> {
            message: message.to_string(),
            data: None,
        }),
    )
        .into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Paginated list payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationEnvelope<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> PaginationEnvelope<T> {
    pub fn new(result: PagedResult<T>, page: u64, page_size: u64) -> Self {
        let total = result.total;
        let total_pages = if total == 0 || page_size == 0 {
            0
        } else {
            (total + page_size - 1) / page_size
        };
        Self {
            content: result.items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_page_size() -> u64 {
    10
}

pub(crate) fn default_priority() -> i32 {
    -1
}

/// Build a normalized page request from raw query fields
pub(crate) fn page_request(
    page: u64,
    page_size: u64,
    sort: Option<SortOrder>,
    sort_by: Option<SortField>,
    keyword: Option<String>,
) -> PageRequest {
    PageRequest {
        page: page.max(1),
        page_size,
        sort: sort.unwrap_or_default(),
        sort_by: sort_by.unwrap_or_default(),
        keyword,
    }
}
