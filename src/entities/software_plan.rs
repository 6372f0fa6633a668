use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Software plan row; the plan list is replaced wholesale on update.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "software_plans")]
#[serde(rename_all = "camelCase")]
#[schema(as = SoftwarePlan)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub software_details_id: Uuid,
    pub name: String,
    pub priority: i32,
    /// JSON string array
    #[sea_orm(column_type = "Json")]
    pub features: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::software_details::Entity",
        from = "Column::SoftwareDetailsId",
        to = "super::software_details::Column::Id",
        on_delete = "Cascade"
    )]
    SoftwareDetails,
}

impl Related<super::software_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
