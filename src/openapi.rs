//! OpenAPI documentation, served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::TokenResponse;
use crate::entities::ai_product_details::{DisplayOptions, WebinarOptions};
use crate::entities::datacenter_cloud_details::{DatacenterCloudType, LinkBlock};
use crate::entities::engagement_block::{EmbedDetails, EmbedType};
use crate::entities::pricing::Currency;
use crate::entities::section::SectionType;
use crate::entities::user::UserRole;
use crate::entities::{
    ai_product_details, datacenter_cloud_details, engagement_block, network_hardware_details,
    pricing, software_details, software_plan,
};
use crate::errors::ErrorResponse;
use crate::handlers;
use crate::handlers::auth::{
    LoginBody, LoginData, OnboardBody, OnboardVerifyBody, UserDto, VerifyLoginBody,
};
use crate::handlers::categories::{CategoryBody, CategoryDto};
use crate::handlers::products::{ProductBody, ProductDto, SoftwareDetailsDto};
use crate::handlers::sections::{SectionBody, SectionDto};
use crate::services::products::{
    AiDetailsInput, DatacenterCloudInput, EngagementInput, NetworkHardwareInput, PricingInput,
    SectionRef, SoftwareInput, SoftwarePlanInput,
};
use crate::services::{EntityRef, SortField, SortOrder};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::health::status,
        handlers::auth::login,
        handlers::auth::verify_login,
        handlers::auth::onboard,
        handlers::auth::onboard_verify,
        handlers::auth::me,
        handlers::auth::logout,
        handlers::sections::create_section,
        handlers::sections::list_sections,
        handlers::sections::get_section,
        handlers::sections::get_section_by_slug,
        handlers::sections::update_section,
        handlers::sections::delete_section,
        handlers::categories::create_category,
        handlers::categories::list_categories,
        handlers::categories::get_category,
        handlers::categories::get_category_by_slug,
        handlers::categories::update_category,
        handlers::categories::delete_category,
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::get_product_by_slug,
        handlers::products::update_product,
        handlers::products::delete_product,
    ),
    components(schemas(
        ErrorResponse,
        TokenResponse,
        LoginBody,
        VerifyLoginBody,
        OnboardBody,
        OnboardVerifyBody,
        LoginData,
        UserDto,
        UserRole,
        SectionBody,
        SectionDto,
        SectionType,
        SectionRef,
        EntityRef,
        SortOrder,
        SortField,
        CategoryBody,
        CategoryDto,
        ProductBody,
        ProductDto,
        SoftwareDetailsDto,
        AiDetailsInput,
        DatacenterCloudInput,
        NetworkHardwareInput,
        SoftwareInput,
        SoftwarePlanInput,
        EngagementInput,
        PricingInput,
        ai_product_details::Model,
        datacenter_cloud_details::Model,
        network_hardware_details::Model,
        software_details::Model,
        software_plan::Model,
        engagement_block::Model,
        pricing::Model,
        DisplayOptions,
        WebinarOptions,
        DatacenterCloudType,
        LinkBlock,
        EmbedType,
        EmbedDetails,
        Currency,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Auth", description = "Phone OTP login, onboarding and session management"),
        (name = "Section", description = "Top-level marketplace sections"),
        (name = "Category", description = "Two-level category tree"),
        (name = "Product", description = "Products and their section-specific detail records"),
    ),
    info(
        title = "Marketplace API",
        description = "Catalog administration API: sections, categories, products and product detail records",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
