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
use crate::errors::ApiError;
use crate::services::categories::{CategoryFilter, CategoryInput, CategoryView};
use crate::services::{EntityRef, SortField, SortOrder};
use crate::AppState;

/// Category create/update body. `level` is derived from `parentId`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Slug is required"))]
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
    pub parent_id: Option<Uuid>,
    pub section_id: Option<Uuid>,
}

impl From<CategoryBody> for CategoryInput {
    fn from(body: CategoryBody) -> Self {
        CategoryInput {
            name: body.name,
            slug: body.slug,
            description: body.description,
            image_url: body.image_url,
            priority: body.priority,
            parent_id: body.parent_id,
            section_id: body.section_id,
        }
    }
}

/// Category response payload with flattened relations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub priority: i32,
    pub level: i32,
    pub section: Option<EntityRef>,
    pub parent: Option<EntityRef>,
    pub children_length: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CategoryView> for CategoryDto {
    fn from(view: CategoryView) -> Self {
        let model = view.category;
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            image_url: model.image_url,
            priority: model.priority,
            level: model.level,
            section: view.section,
            parent: view.parent,
            children_length: view.children_length,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(rename = "pageSize", alias = "limit", default = "default_page_size")]
    pub page_size: u64,
    pub sort: Option<SortOrder>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<SortField>,
    pub keyword: Option<String>,
    pub level: Option<i32>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<Uuid>,
    #[serde(rename = "sectionId")]
    pub section_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/category",
    request_body = CategoryBody,
    responses(
        (status = 201, description = "Category created"),
        (status = 409, description = "Category name already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "Category"
)]
pub async fn create_category(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<CategoryBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let created = state.services.categories.create(body.into()).await?;
    Ok(created_response(
        "Category created successfully",
        CategoryDto::from(created),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/category",
    params(CategoryListQuery),
    responses((status = 200, description = "Categories fetched")),
    tag = "Category"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> Result<Response, ApiError> {
    let page = page_request(
        query.page,
        query.page_size,
        query.sort,
        query.sort_by,
        query.keyword,
    );
    let filter = CategoryFilter {
        level: query.level,
        parent_id: query.parent_id,
        section_id: query.section_id,
    };
    let result = state
        .services
        .categories
        .list(&page, &filter)
        .await?
        .map(CategoryDto::from);

    Ok(success_response(
        "Categories fetched successfully",
        PaginationEnvelope::new(result, page.page, page.page_size),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category fetched"),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let view = state.services.categories.get_by_id(id).await?;
    Ok(success_response(
        "Category fetched successfully",
        CategoryDto::from(view),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/category/slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category fetched"),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn get_category_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let view = state.services.categories.get_by_slug(&slug).await?;
    Ok(success_response(
        "Category fetched successfully",
        CategoryDto::from(view),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryBody,
    responses(
        (status = 200, description = "Category updated"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "Category"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<CategoryBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let updated = state.services.categories.update(id, body.into()).await?;
    Ok(success_response(
        "Category updated successfully",
        CategoryDto::from(updated),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Category"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state.services.categories.delete(id).await?;
    Ok(message_response("Category deleted successfully"))
}
