use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product entity for the catalog
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub brand_name: Option<String>,
    pub industry: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub priority: i32,
    pub show_vendor: bool,
    pub has_pricing: bool,
    pub section_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    /// Vendors live in a separate service; this is a plain reference.
    pub vendor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id",
        on_delete = "SetNull"
    )]
    Section,

    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,

    #[sea_orm(has_one = "super::ai_product_details::Entity")]
    AiProductDetails,

    #[sea_orm(has_one = "super::datacenter_cloud_details::Entity")]
    DatacenterCloudDetails,

    #[sea_orm(has_one = "super::network_hardware_details::Entity")]
    NetworkHardwareDetails,

    #[sea_orm(has_one = "super::software_details::Entity")]
    SoftwareDetails,

    #[sea_orm(has_one = "super::engagement_block::Entity")]
    EngagementBlock,

    #[sea_orm(has_one = "super::pricing::Entity")]
    Pricing,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::ai_product_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiProductDetails.def()
    }
}

impl Related<super::datacenter_cloud_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DatacenterCloudDetails.def()
    }
}

impl Related<super::network_hardware_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NetworkHardwareDetails.def()
    }
}

impl Related<super::software_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareDetails.def()
    }
}

impl Related<super::engagement_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EngagementBlock.def()
    }
}

impl Related<super::pricing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pricing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
