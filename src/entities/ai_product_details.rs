use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detail record for products under AI_LIKE sections.
///
/// The show/detail call-to-action pairs are stored as JSON columns holding
/// [`DisplayOptions`] (webinar adds a date, see [`WebinarOptions`]).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "ai_product_details")]
#[serde(rename_all = "camelCase")]
#[schema(as = AiProductDetails)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub product_id: Uuid,
    pub include_details: bool,
    pub solid_dot_color: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub tagline1: Option<String>,
    pub tagline2: Option<String>,
    pub is_claimable: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub claim: Option<Json>,
    pub show_startup_offer: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub startup_offer: Option<Json>,
    pub show_special_offer: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub special_offer: Option<Json>,
    pub show_start_trial: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub start_trial: Option<Json>,
    pub show_book_demo: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub book_demo: Option<Json>,
    pub show_quote: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub quote: Option<Json>,
    pub show_call_back: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub call_back: Option<Json>,
    pub show_chat: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub chat: Option<Json>,
    pub show_discount: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub discount: Option<Json>,
    pub show_webinar: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub webinar: Option<Json>,
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

/// Rendering options for a call-to-action button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
}

/// Webinar call-to-action options; extends the button options with a date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebinarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
}
