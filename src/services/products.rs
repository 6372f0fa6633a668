use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntityRef, PageRequest, PagedResult, SortField};
use crate::entities::ai_product_details::{self, DisplayOptions, WebinarOptions};
use crate::entities::datacenter_cloud_details::{self, DatacenterCloudType, LinkBlock};
use crate::entities::engagement_block::{self, EmbedDetails};
use crate::entities::pricing::{self, Currency};
use crate::entities::section::SectionType;
use crate::entities::{
    category, network_hardware_details, product, section, software_details, software_plan,
};
use crate::errors::ServiceError;

/// Hard cap on the product page size
pub const MAX_PAGE_SIZE: u64 = 100;

/// Product CRUD with section-type-resolved detail records
#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

/// Mutable product fields plus the optional attachments.
/// Which detail payload applies is decided by the owning section's type;
/// payloads for other variants are dropped.
#[derive(Debug, Clone)]
pub struct ProductInput {
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

/// Entity filters for product listing
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub section_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub vendor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiDetailsInput {
    #[serde(default)]
    pub include_details: bool,
    pub solid_dot_color: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i32,
    pub tagline1: Option<String>,
    pub tagline2: Option<String>,
    #[serde(default)]
    pub is_claimable: bool,
    pub claim: Option<DisplayOptions>,
    #[serde(default)]
    pub show_startup_offer: bool,
    pub startup_offer: Option<DisplayOptions>,
    #[serde(default)]
    pub show_special_offer: bool,
    pub special_offer: Option<DisplayOptions>,
    #[serde(default)]
    pub show_start_trial: bool,
    pub start_trial: Option<DisplayOptions>,
    #[serde(default)]
    pub show_book_demo: bool,
    pub book_demo: Option<DisplayOptions>,
    #[serde(default)]
    pub show_quote: bool,
    pub quote: Option<DisplayOptions>,
    #[serde(default)]
    pub show_call_back: bool,
    pub call_back: Option<DisplayOptions>,
    #[serde(default)]
    pub show_chat: bool,
    pub chat: Option<DisplayOptions>,
    #[serde(default)]
    pub show_discount: bool,
    pub discount: Option<DisplayOptions>,
    #[serde(default)]
    pub show_webinar: bool,
    pub webinar: Option<WebinarOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatacenterCloudInput {
    #[serde(rename = "type", default = "default_datacenter_type")]
    pub detail_type: DatacenterCloudType,
    #[serde(default)]
    pub is_ai_certified: bool,
    #[serde(default)]
    pub is_green_compatible: bool,
    pub ai_certified_link: Option<String>,
    pub green_compatible_link: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub certifications: Option<LinkBlock>,
    pub locations: Option<LinkBlock>,
    pub services: Option<LinkBlock>,
    pub expertise: Option<LinkBlock>,
}

fn default_datacenter_type() -> DatacenterCloudType {
    DatacenterCloudType::DataCenter
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHardwareInput {
    pub model: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareInput {
    pub view_link: Option<String>,
    #[serde(rename = "softwarePlans", default)]
    pub plans: Vec<SoftwarePlanInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoftwarePlanInput {
    pub name: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_priority() -> i32 {
    -1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngagementInput {
    #[serde(default)]
    pub show_info: bool,
    pub info_details: Option<EmbedDetails>,
    #[serde(default)]
    pub show_brochure: bool,
    pub brochure_details: Option<EmbedDetails>,
    #[serde(default)]
    pub show_form: bool,
    pub form_details: Option<EmbedDetails>,
    #[serde(default)]
    pub show_trending_brands: bool,
    pub trending_brands_details: Option<EmbedDetails>,
    #[serde(default)]
    pub show_calendar: bool,
    pub calendar_details: Option<EmbedDetails>,
    #[serde(default)]
    pub show_share_links: bool,
    pub share_links: Option<Vec<LinkBlock>>,
    #[serde(default)]
    pub show_badge: bool,
    pub badge_details: Option<EmbedDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    #[serde(default)]
    pub is_starting_price: bool,
    pub price: Option<Decimal>,
    pub price_text: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: Currency,
    pub btn_text: Option<String>,
    pub btn_link: Option<String>,
    #[serde(default)]
    pub has_free_demo: bool,
    pub free_demo_link: Option<String>,
}

fn default_currency() -> Currency {
    Currency::Inr
}

/// The detail payload that actually applies to a write, resolved once from
/// the owning section's type. Payloads for non-matching variants are
/// silently discarded.
#[derive(Debug, Clone)]
pub enum DetailPayload {
    Ai(AiDetailsInput),
    DatacenterCloud(DatacenterCloudInput),
    NetworkHardware(NetworkHardwareInput),
    Software(SoftwareInput),
    None,
}

impl DetailPayload {
    pub fn resolve(section_type: SectionType, input: &mut ProductInput) -> Self {
        let ai = input.ai_product_details.take();
        let dc = input.datacenter_cloud_details.take();
        let nh = input.network_hardware_details.take();
        let sw = input.software_details.take();

        match section_type {
            SectionType::AiLike => ai.map(DetailPayload::Ai).unwrap_or(DetailPayload::None),
            SectionType::DataCenter | SectionType::Cloud => dc
                .map(DetailPayload::DatacenterCloud)
                .unwrap_or(DetailPayload::None),
            SectionType::NetworkHardware => nh
                .map(DetailPayload::NetworkHardware)
                .unwrap_or(DetailPayload::None),
            SectionType::Software => sw
                .map(DetailPayload::Software)
                .unwrap_or(DetailPayload::None),
        }
    }
}

/// Flattened `{ id, slug, type }` section reference
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionRef {
    pub id: Uuid,
    pub slug: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

/// Product plus its flattened relations and attachments
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: product::Model,
    pub section: Option<SectionRef>,
    pub category: Option<EntityRef>,
    pub ai_product_details: Option<ai_product_details::Model>,
    pub datacenter_cloud_details: Option<datacenter_cloud_details::Model>,
    pub network_hardware_details: Option<network_hardware_details::Model>,
    pub software_details: Option<(software_details::Model, Vec<software_plan::Model>)>,
    pub engagement_block: Option<engagement_block::Model>,
    pub pricing: Option<pricing::Model>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: ProductInput) -> Result<ProductView, ServiceError> {
        self.save(None, input).await
    }

    pub async fn update(&self, id: Uuid, input: ProductInput) -> Result<ProductView, ServiceError> {
        let existing = product::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;
        self.save(Some(existing), input).await
    }

    /// Shared create/update path. The product row and every attachment are
    /// written inside one transaction.
    async fn save(
        &self,
        existing: Option<product::Model>,
        mut input: ProductInput,
    ) -> Result<ProductView, ServiceError> {
        let section = section::Entity::find_by_id(input.section_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Section".to_string()))?;

        let payload = DetailPayload::resolve(section.section_type, &mut input);
        let engagement = input.engagement_block.take();
        let pricing_input = input.pricing.take();

        let txn = self.db.begin().await?;
        let now = Utc::now();

        let product_id = match existing {
            Some(model) => {
                let id = model.id;
                let mut active: product::ActiveModel = model.into();
                active.name = Set(input.name);
                active.slug = Set(input.slug);
                active.brand_name = Set(input.brand_name);
                active.industry = Set(input.industry);
                active.description = Set(input.description);
                active.image_url = Set(input.image_url);
                active.link = Set(input.link);
                active.priority = Set(input.priority);
                active.show_vendor = Set(input.show_vendor);
                active.has_pricing = Set(input.has_pricing);
                active.section_id = Set(Some(input.section_id));
                active.category_id = Set(input.category_id);
                active.vendor_id = Set(input.vendor_id);
                active.updated_at = Set(now);
                active.update(&txn).await?;
                id
            }
            None => {
                let id = Uuid::new_v4();
                let active = product::ActiveModel {
                    id: Set(id),
                    name: Set(input.name),
                    slug: Set(input.slug),
                    brand_name: Set(input.brand_name),
                    industry: Set(input.industry),
                    description: Set(input.description),
                    image_url: Set(input.image_url),
                    link: Set(input.link),
                    priority: Set(input.priority),
                    show_vendor: Set(input.show_vendor),
                    has_pricing: Set(input.has_pricing),
                    section_id: Set(Some(input.section_id)),
                    category_id: Set(input.category_id),
                    vendor_id: Set(input.vendor_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                active.insert(&txn).await?;
                id
            }
        };

        match payload {
            DetailPayload::Ai(details) => upsert_ai_details(&txn, product_id, details).await?,
            DetailPayload::DatacenterCloud(details) => {
                upsert_datacenter_details(&txn, product_id, details).await?
            }
            DetailPayload::NetworkHardware(details) => {
                upsert_network_details(&txn, product_id, details).await?
            }
            DetailPayload::Software(details) => {
                upsert_software_details(&txn, product_id, details).await?
            }
            DetailPayload::None => {}
        }

        if let Some(block) = engagement {
            upsert_engagement_block(&txn, product_id, block).await?;
        }

        // Pricing attaches only when the product opts in
        if input.has_pricing {
            if let Some(pricing_data) = pricing_input {
                upsert_pricing(&txn, product_id, pricing_data).await?;
            }
        }

        txn.commit().await?;
        info!(product_id = %product_id, "product saved");

        self.get_by_id(product_id).await
    }

    pub async fn list(
        &self,
        page: &PageRequest,
        filter: &ProductFilter,
    ) -> Result<PagedResult<ProductView>, ServiceError> {
        if page.page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::BadRequest(
                "Only 100 products can be fetched at a time".to_string(),
            ));
        }

        let mut query = product::Entity::find();

        if let Some(keyword) = page.keyword.as_deref().filter(|k| !k.is_empty()) {
            let pattern = format!("%{}%", keyword.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product::Entity,
                            product::Column::Name,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product::Entity,
                            product::Column::Description,
                        ))))
                        .like(pattern),
                    ),
            );
        }
        if let Some(section_id) = filter.section_id {
            query = query.filter(product::Column::SectionId.eq(section_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(product::Column::CategoryId.eq(category_id));
        }
        if let Some(vendor_id) = filter.vendor_id {
            query = query.filter(product::Column::VendorId.eq(vendor_id));
        }

        let total = query.clone().count(&*self.db).await?;

        let sort_column = match page.sort_by {
            SortField::CreatedAt => product::Column::CreatedAt,
            SortField::Priority => product::Column::Priority,
        };
        let items = query
            .order_by(sort_column, page.sort.into())
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await?;

        let views = self.shape_views(items).await?;
        Ok(PagedResult {
            items: views,
            total,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductView, ServiceError> {
        let model = product::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;
        self.into_view(model).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<ProductView, ServiceError> {
        let model = product::Entity::find()
            .filter(product::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;
        self.into_view(model).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = product::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;

        // Detail rows and attachments go away via FK cascade
        product::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    async fn into_view(&self, model: product::Model) -> Result<ProductView, ServiceError> {
        let mut views = self.shape_views(vec![model]).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::InternalError("product view shaping failed".to_string()))
    }

    /// Batch-load relations and attachments for one page of products
    async fn shape_views(
        &self,
        models: Vec<product::Model>,
    ) -> Result<Vec<ProductView>, ServiceError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let section_ids: Vec<Uuid> = models.iter().filter_map(|m| m.section_id).collect();
        let category_ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();

        let section_refs: HashMap<Uuid, SectionRef> = if section_ids.is_empty() {
            HashMap::new()
        } else {
            section::Entity::find()
                .filter(section::Column::Id.is_in(section_ids))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|s| {
                    (
                        s.id,
                        SectionRef {
                            id: s.id,
                            slug: s.slug,
                            section_type: s.section_type,
                        },
                    )
                })
                .collect()
        };

        let category_refs: HashMap<Uuid, EntityRef> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            category::Entity::find()
                .filter(category::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|c| {
                    (
                        c.id,
                        EntityRef {
                            id: c.id,
                            slug: c.slug,
                        },
                    )
                })
                .collect()
        };

        let mut ai_rows: HashMap<Uuid, ai_product_details::Model> =
            ai_product_details::Entity::find()
                .filter(ai_product_details::Column::ProductId.is_in(ids.clone()))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|row| (row.product_id, row))
                .collect();

        let mut dc_rows: HashMap<Uuid, datacenter_cloud_details::Model> =
            datacenter_cloud_details::Entity::find()
                .filter(datacenter_cloud_details::Column::ProductId.is_in(ids.clone()))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|row| (row.product_id, row))
                .collect();

        let mut nh_rows: HashMap<Uuid, network_hardware_details::Model> =
            network_hardware_details::Entity::find()
                .filter(network_hardware_details::Column::ProductId.is_in(ids.clone()))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|row| (row.product_id, row))
                .collect();

        let sw_rows: Vec<software_details::Model> = software_details::Entity::find()
            .filter(software_details::Column::ProductId.is_in(ids.clone()))
            .all(&*self.db)
            .await?;

        let sw_ids: Vec<Uuid> = sw_rows.iter().map(|row| row.id).collect();
        let mut plans_by_details: HashMap<Uuid, Vec<software_plan::Model>> = HashMap::new();
        if !sw_ids.is_empty() {
            let plans = software_plan::Entity::find()
                .filter(software_plan::Column::SoftwareDetailsId.is_in(sw_ids))
                .order_by(software_plan::Column::Priority, sea_orm::Order::Asc)
                .all(&*self.db)
                .await?;
            for plan in plans {
                plans_by_details
                    .entry(plan.software_details_id)
                    .or_default()
                    .push(plan);
            }
        }
        let mut sw_by_product: HashMap<Uuid, (software_details::Model, Vec<software_plan::Model>)> =
            sw_rows
                .into_iter()
                .map(|row| {
                    let plans = plans_by_details.remove(&row.id).unwrap_or_default();
                    (row.product_id, (row, plans))
                })
                .collect();

        let mut engagement_rows: HashMap<Uuid, engagement_block::Model> =
            engagement_block::Entity::find()
                .filter(engagement_block::Column::ProductId.is_in(ids.clone()))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|row| (row.product_id, row))
                .collect();

        let mut pricing_rows: HashMap<Uuid, pricing::Model> = pricing::Entity::find()
            .filter(pricing::Column::ProductId.is_in(ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|row| (row.product_id, row))
            .collect();

        Ok(models
            .into_iter()
            .map(|model| {
                let section = model.section_id.and_then(|id| section_refs.get(&id).cloned());
                let category = model
                    .category_id
                    .and_then(|id| category_refs.get(&id).cloned());
                ProductView {
                    ai_product_details: ai_rows.remove(&model.id),
                    datacenter_cloud_details: dc_rows.remove(&model.id),
                    network_hardware_details: nh_rows.remove(&model.id),
                    software_details: sw_by_product.remove(&model.id),
                    engagement_block: engagement_rows.remove(&model.id),
                    pricing: pricing_rows.remove(&model.id),
                    section,
                    category,
                    product: model,
                }
            })
            .collect())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(value)
        .map_err(|e| ServiceError::InternalError(format!("failed to encode detail payload: {e}")))
}

fn to_json_opt<T: Serialize>(value: &Option<T>) -> Result<Option<serde_json::Value>, ServiceError> {
    value.as_ref().map(to_json).transpose()
}

async fn upsert_ai_details(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    details: AiDetailsInput,
) -> Result<(), ServiceError> {
    let existing = ai_product_details::Entity::find()
        .filter(ai_product_details::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => ai_product_details::ActiveModel::from(model),
        None => ai_product_details::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            created_at: Set(now),
            ..Default::default()
        },
    };

    active.include_details = Set(details.include_details);
    active.solid_dot_color = Set(details.solid_dot_color);
    active.rating = Set(details.rating);
    active.review_count = Set(details.review_count);
    active.tagline1 = Set(details.tagline1);
    active.tagline2 = Set(details.tagline2);
    active.is_claimable = Set(details.is_claimable);
    active.claim = Set(to_json_opt(&details.claim)?);
    active.show_startup_offer = Set(details.show_startup_offer);
    active.startup_offer = Set(to_json_opt(&details.startup_offer)?);
    active.show_special_offer = Set(details.show_special_offer);
    active.special_offer = Set(to_json_opt(&details.special_offer)?);
    active.show_start_trial = Set(details.show_start_trial);
    active.start_trial = Set(to_json_opt(&details.start_trial)?);
    active.show_book_demo = Set(details.show_book_demo);
    active.book_demo = Set(to_json_opt(&details.book_demo)?);
    active.show_quote = Set(details.show_quote);
    active.quote = Set(to_json_opt(&details.quote)?);
    active.show_call_back = Set(details.show_call_back);
    active.call_back = Set(to_json_opt(&details.call_back)?);
    active.show_chat = Set(details.show_chat);
    active.chat = Set(to_json_opt(&details.chat)?);
    active.show_discount = Set(details.show_discount);
    active.discount = Set(to_json_opt(&details.discount)?);
    active.show_webinar = Set(details.show_webinar);
    active.webinar = Set(to_json_opt(&details.webinar)?);
    active.updated_at = Set(now);

    save_active(txn, active, is_new).await
}

async fn upsert_datacenter_details(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    details: DatacenterCloudInput,
) -> Result<(), ServiceError> {
    let existing = datacenter_cloud_details::Entity::find()
        .filter(datacenter_cloud_details::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => datacenter_cloud_details::ActiveModel::from(model),
        None => datacenter_cloud_details::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            created_at: Set(now),
            ..Default::default()
        },
    };

    active.detail_type = Set(details.detail_type);
    active.is_ai_certified = Set(details.is_ai_certified);
    active.is_green_compatible = Set(details.is_green_compatible);
    active.ai_certified_link = Set(details.ai_certified_link);
    active.green_compatible_link = Set(details.green_compatible_link);
    active.features = Set(to_json(&details.features)?);
    active.certifications = Set(to_json_opt(&details.certifications)?);
    active.locations = Set(to_json_opt(&details.locations)?);
    active.services = Set(to_json_opt(&details.services)?);
    active.expertise = Set(to_json_opt(&details.expertise)?);
    active.updated_at = Set(now);

    save_active(txn, active, is_new).await
}

async fn upsert_network_details(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    details: NetworkHardwareInput,
) -> Result<(), ServiceError> {
    let existing = network_hardware_details::Entity::find()
        .filter(network_hardware_details::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => network_hardware_details::ActiveModel::from(model),
        None => network_hardware_details::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            created_at: Set(now),
            ..Default::default()
        },
    };

    active.model = Set(details.model);
    active.features = Set(to_json(&details.features)?);
    active.updated_at = Set(now);

    save_active(txn, active, is_new).await
}

/// Software details upsert. The plan list is replaced wholesale.
async fn upsert_software_details(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    details: SoftwareInput,
) -> Result<(), ServiceError> {
    let existing = software_details::Entity::find()
        .filter(software_details::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let details_id = match existing {
        Some(model) => {
            let id = model.id;
            let mut active = software_details::ActiveModel::from(model);
            active.view_link = Set(details.view_link);
            active.updated_at = Set(now);
            active.update(txn).await?;
            id
        }
        None => {
            let id = Uuid::new_v4();
            let active = software_details::ActiveModel {
                id: Set(id),
                product_id: Set(product_id),
                view_link: Set(details.view_link),
                created_at: Set(now),
                updated_at: Set(now),
            };
            active.insert(txn).await?;
            id
        }
    };

    software_plan::Entity::delete_many()
        .filter(software_plan::Column::SoftwareDetailsId.eq(details_id))
        .exec(txn)
        .await?;

    if !details.plans.is_empty() {
        let rows = details
            .plans
            .into_iter()
            .map(|plan| {
                Ok(software_plan::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    software_details_id: Set(details_id),
                    name: Set(plan.name),
                    priority: Set(plan.priority),
                    features: Set(to_json(&plan.features)?),
                    created_at: Set(now),
                    updated_at: Set(now),
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;
        software_plan::Entity::insert_many(rows).exec(txn).await?;
    }

    Ok(())
}

async fn upsert_engagement_block(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    block: EngagementInput,
) -> Result<(), ServiceError> {
    let existing = engagement_block::Entity::find()
        .filter(engagement_block::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => engagement_block::ActiveModel::from(model),
        None => engagement_block::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            created_at: Set(now),
            ..Default::default()
        },
    };

    active.show_info = Set(block.show_info);
    active.info_details = Set(to_json_opt(&block.info_details)?);
    active.show_brochure = Set(block.show_brochure);
    active.brochure_details = Set(to_json_opt(&block.brochure_details)?);
    active.show_form = Set(block.show_form);
    active.form_details = Set(to_json_opt(&block.form_details)?);
    active.show_trending_brands = Set(block.show_trending_brands);
    active.trending_brands_details = Set(to_json_opt(&block.trending_brands_details)?);
    active.show_calendar = Set(block.show_calendar);
    active.calendar_details = Set(to_json_opt(&block.calendar_details)?);
    active.show_share_links = Set(block.show_share_links);
    active.share_links = Set(to_json_opt(&block.share_links)?);
    active.show_badge = Set(block.show_badge);
    active.badge_details = Set(to_json_opt(&block.badge_details)?);
    active.updated_at = Set(now);

    save_active(txn, active, is_new).await
}

async fn upsert_pricing(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    input: PricingInput,
) -> Result<(), ServiceError> {
    let existing = pricing::Entity::find()
        .filter(pricing::Column::ProductId.eq(product_id))
        .one(txn)
        .await?;

    let now = Utc::now();
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => pricing::ActiveModel::from(model),
        None => pricing::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            created_at: Set(now),
            ..Default::default()
        },
    };

    active.is_starting_price = Set(input.is_starting_price);
    active.price = Set(input.price);
    active.price_text = Set(input.price_text);
    active.currency = Set(input.currency);
    active.btn_text = Set(input.btn_text);
    active.btn_link = Set(input.btn_link);
    active.has_free_demo = Set(input.has_free_demo);
    active.free_demo_link = Set(input.free_demo_link);
    active.updated_at = Set(now);

    save_active(txn, active, is_new).await
}

/// Insert or update depending on whether the row was loaded from the
/// database. New rows carry a pre-assigned id, so `save` cannot decide.
async fn save_active<A>(txn: &DatabaseTransaction, active: A, is_new: bool) -> Result<(), ServiceError>
where
    A: ActiveModelTrait + sea_orm::ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: sea_orm::IntoActiveModel<A>,
{
    if is_new {
        active.insert(txn).await?;
    } else {
        active.update(txn).await?;
    }
    Ok(())
}
