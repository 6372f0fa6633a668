use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detail record shared by DATA_CENTER and CLOUD sections.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "datacenter_cloud_details")]
#[serde(rename_all = "camelCase")]
#[schema(as = DatacenterCloudDetails)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub product_id: Uuid,
    #[serde(rename = "type")]
    pub detail_type: DatacenterCloudType,
    pub is_ai_certified: bool,
    pub is_green_compatible: bool,
    pub ai_certified_link: Option<String>,
    pub green_compatible_link: Option<String>,
    /// JSON string array
    #[sea_orm(column_type = "Json")]
    pub features: Json,
    /// [`LinkBlock`] JSON columns
    #[sea_orm(column_type = "Json", nullable)]
    pub certifications: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub locations: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub services: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub expertise: Option<Json>,
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

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DatacenterCloudType {
    #[sea_orm(string_value = "DATA_CENTER")]
    #[serde(rename = "DATA_CENTER")]
    DataCenter,
    #[sea_orm(string_value = "CLOUD")]
    #[serde(rename = "CLOUD")]
    Cloud,
}

/// Labeled link with ordering, used for certifications, locations,
/// services and expertise blocks (and share links on engagement blocks)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkBlock {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default = "default_link_priority")]
    pub priority: i32,
}

fn default_link_priority() -> i32 {
    -1
}
