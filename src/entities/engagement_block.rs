use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Section-type independent engagement attachments for a product page.
///
/// Detail payloads live in JSON columns; their shapes are the embed types
/// below. Share links reuse
/// [`LinkBlock`](super::datacenter_cloud_details::LinkBlock).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "engagement_blocks")]
#[serde(rename_all = "camelCase")]
#[schema(as = EngagementBlock)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub product_id: Uuid,
    pub show_info: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub info_details: Option<Json>,
    pub show_brochure: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub brochure_details: Option<Json>,
    pub show_form: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub form_details: Option<Json>,
    pub show_trending_brands: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub trending_brands_details: Option<Json>,
    pub show_calendar: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub calendar_details: Option<Json>,
    pub show_share_links: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub share_links: Option<Json>,
    pub show_badge: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub badge_details: Option<Json>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// How an engagement attachment is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EmbedType {
    #[serde(rename = "LINK")]
    Link,
    #[serde(rename = "EMBEDDABLE")]
    Embeddable,
    #[serde(rename = "FILE")]
    File,
}

/// Shape of the JSON detail payloads above
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_type: Option<EmbedType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
