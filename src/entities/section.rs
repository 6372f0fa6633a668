use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level marketplace section. Its `type` decides which product detail
/// record applies to products underneath it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub section_type: SectionType,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category::Entity")]
    Categories,
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Section type enumeration
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
pub enum SectionType {
    #[sea_orm(string_value = "AI_LIKE")]
    #[serde(rename = "AI_LIKE")]
    AiLike,
    #[sea_orm(string_value = "DATA_CENTER")]
    #[serde(rename = "DATA_CENTER")]
    DataCenter,
    #[sea_orm(string_value = "CLOUD")]
    #[serde(rename = "CLOUD")]
    Cloud,
    #[sea_orm(string_value = "SOFTWARE")]
    #[serde(rename = "SOFTWARE")]
    Software,
    #[sea_orm(string_value = "NETWORK_HARDWARE")]
    #[serde(rename = "NETWORK_HARDWARE")]
    NetworkHardware,
}
