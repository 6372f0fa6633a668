use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{
    created_response, default_page, default_page_size, default_priority, message_response,
    page_request, success_response, validate_input, PaginationEnvelope,
};
use crate::entities::section::{self, SectionType};
use crate::errors::ApiError;
use crate::services::sections::SectionInput;
use crate::services::{SortField, SortOrder};
use crate::AppState;

/// Section create/update body
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionBody {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Slug is required"))]
    pub slug: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl From<SectionBody> for SectionInput {
    fn from(body: SectionBody) -> Self {
        SectionInput {
            name: body.name,
            slug: body.slug,
            section_type: body.section_type,
            priority: body.priority,
        }
    }
}

/// Section response payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<section::Model> for SectionDto {
    fn from(model: section::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            section_type: model.section_type,
            priority: model.priority,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SectionListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(rename = "pageSize", alias = "limit", default = "default_page_size")]
    pub page_size: u64,
    pub sort: Option<SortOrder>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<SortField>,
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub section_type: Option<SectionType>,
}

#[utoipa::path(
    post,
    path = "/api/v1/section",
    request_body = SectionBody,
    responses(
        (status = 201, description = "Section created"),
        (status = 409, description = "Section name already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "Section"
)]
pub async fn create_section(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<SectionBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let created = state.services.sections.create(body.into()).await?;
    Ok(created_response(
        "Section created successfully",
        SectionDto::from(created),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/section",
    params(SectionListQuery),
    responses((status = 200, description = "Sections fetched")),
    tag = "Section"
)]
pub async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<SectionListQuery>,
) -> Result<Response, ApiError> {
    let page = page_request(
        query.page,
        query.page_size,
        query.sort,
        query.sort_by,
        query.keyword,
    );
    let result = state
        .services
        .sections
        .list(&page, query.section_type)
        .await?
        .map(SectionDto::from);

    Ok(success_response(
        "Sections fetched successfully",
        PaginationEnvelope::new(result, page.page, page.page_size),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/section/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section fetched"),
        (status = 404, description = "Section not found")
    ),
    tag = "Section"
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let model = state.services.sections.get_by_id(id).await?;
    Ok(success_response(
        "Section fetched successfully",
        SectionDto::from(model),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/section/slug/{slug}",
    params(("slug" = String, Path, description = "Section slug")),
    responses(
        (status = 200, description = "Section fetched"),
        (status = 404, description = "Section not found")
    ),
    tag = "Section"
)]
pub async fn get_section_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let model = state.services.sections.get_by_slug(&slug).await?;
    Ok(success_response(
        "Section fetched successfully",
        SectionDto::from(model),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/section/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    request_body = SectionBody,
    responses(
        (status = 200, description = "Section updated"),
        (status = 404, description = "Section not found"),
        (status = 409, description = "Section name already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "Section"
)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<SectionBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let updated = state.services.sections.update(id, body.into()).await?;
    Ok(success_response(
        "Section updated successfully",
        SectionDto::from(updated),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/section/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section deleted"),
        (status = 404, description = "Section not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Section"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state.services.sections.delete(id).await?;
    Ok(message_response("Section deleted successfully"))
}
