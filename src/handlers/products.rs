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
use crate::entities::{
    ai_product_details, datacenter_cloud_details, engagement_block, network_hardware_details,
    pricing, software_details, software_plan,
};
use crate::errors::ApiError;
use crate::services::products::{
    AiDetailsInput, DatacenterCloudInput, EngagementInput, NetworkHardwareInput, PricingInput,
    ProductFilter, ProductInput, ProductView, SectionRef, SoftwareInput,
};
use crate::services::{EntityRef, SortField, SortOrder};
use crate::AppState;

/// Product create/update body. Detail payloads are optional; only the one
/// matching the owning section's type is persisted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Slug is required"))]
    pub slug: String,
    pub brand_name: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub show_vendor: bool,
    #[serde(default)]
    pub has_pricing: bool,
    pub section_id: Uuid,
    pub category_id: Option<Uuid>,
    pub vendor_id: Option<Uuid>,
    pub engagement_block: Option<EngagementInput>,
    pub pricing: Option<PricingInput>,
    pub ai_product_details: Option<AiDetailsInput>,
    pub datacenter_cloud_details: Option<DatacenterCloudInput>,
    pub network_hardware_details: Option<NetworkHardwareInput>,
    pub software_details: Option<SoftwareInput>,
}

impl From<ProductBody> for ProductInput {
    fn from(body: ProductBody) -> Self {
        ProductInput {
            name: body.name,
            slug: body.slug,
            brand_name: body.brand_name,
            industry: body.industry,
            description: body.description,
            image_url: body.image_url,
            link: body.link,
            priority: body.priority,
            show_vendor: body.show_vendor,
            has_pricing: body.has_pricing,
            section_id: body.section_id,
            category_id: body.category_id,
            vendor_id: body.vendor_id,
            engagement_block: body.engagement_block,
            pricing: body.pricing,
            ai_product_details: body.ai_product_details,
            datacenter_cloud_details: body.datacenter_cloud_details,
            network_hardware_details: body.network_hardware_details,
            software_details: body.software_details,
        }
    }
}

/// Software details plus the owned plan list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDetailsDto {
    #[serde(flatten)]
    pub details: software_details::Model,
    pub software_plans: Vec<software_plan::Model>,
}

/// Product response payload with flattened relations. Attachments appear
/// only when a row exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub brand_name: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub priority: i32,
    pub show_vendor: bool,
    pub has_pricing: bool,
    pub section: Option<SectionRef>,
    pub category: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_product_details: Option<ai_product_details::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter_cloud_details: Option<datacenter_cloud_details::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_hardware_details: Option<network_hardware_details::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_details: Option<SoftwareDetailsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_block: Option<engagement_block::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<pricing::Model>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductView> for ProductDto {
    fn from(view: ProductView) -> Self {
        let model = view.product;
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            brand_name: model.brand_name,
            industry: model.industry,
            description: model.description,
            image_url: model.image_url,
            link: model.link,
            priority: model.priority,
            show_vendor: model.show_vendor,
            has_pricing: model.has_pricing,
            section: view.section,
            category: view.category,
            ai_product_details: view.ai_product_details,
            datacenter_cloud_details: view.datacenter_cloud_details,
            network_hardware_details: view.network_hardware_details,
            software_details: view.software_details.map(|(details, software_plans)| {
                SoftwareDetailsDto {
                    details,
                    software_plans,
                }
            }),
            engagement_block: view.engagement_block,
            pricing: view.pricing,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(rename = "pageSize", alias = "limit", default = "default_page_size")]
    pub page_size: u64,
    pub sort: Option<SortOrder>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<SortField>,
    pub keyword: Option<String>,
    #[serde(rename = "sectionId")]
    pub section_id: Option<Uuid>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<Uuid>,
    #[serde(rename = "vendorId")]
    pub vendor_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/product",
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product created"),
        (status = 404, description = "Section not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<ProductBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let created = state.services.products.create(body.into()).await?;
    Ok(created_response(
        "Product created successfully",
        ProductDto::from(created),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/product",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products fetched"),
        (status = 400, description = "Page size above the fetch limit")
    ),
    tag = "Product"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Response, ApiError> {
    let page = page_request(
        query.page,
        query.page_size,
        query.sort,
        query.sort_by,
        query.keyword,
    );
    let filter = ProductFilter {
        section_id: query.section_id,
        category_id: query.category_id,
        vendor_id: query.vendor_id,
    };
    let result = state
        .services
        .products
        .list(&page, &filter)
        .await?
        .map(ProductDto::from);

    Ok(success_response(
        "Products fetched successfully",
        PaginationEnvelope::new(result, page.page, page.page_size),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/product/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product fetched"),
        (status = 404, description = "Product not found")
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let view = state.services.products.get_by_id(id).await?;
    Ok(success_response(
        "Product fetched successfully",
        ProductDto::from(view),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/product/slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product fetched"),
        (status = 404, description = "Product not found")
    ),
    tag = "Product"
)]
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let view = state.services.products.get_by_slug(&slug).await?;
    Ok(success_response(
        "Product fetched successfully",
        ProductDto::from(view),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/product/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = ProductBody,
    responses(
        (status = 200, description = "Product updated"),
        (status = 404, description = "Product or section not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Product"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<ProductBody>,
) -> Result<Response, ApiError> {
    validate_input(&body)?;
    let updated = state.services.products.update(id, body.into()).await?;
    Ok(success_response(
        "Product updated successfully",
        ProductDto::from(updated),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/product/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Product"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state.services.products.delete(id).await?;
    Ok(message_response("Product deleted successfully"))
}
