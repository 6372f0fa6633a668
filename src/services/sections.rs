use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{PageRequest, PagedResult, SortField};
use crate::entities::section::{self, SectionType};
use crate::errors::ServiceError;

/// CRUD over marketplace sections
#[derive(Clone)]
pub struct SectionService {
    db: Arc<DatabaseConnection>,
}

/// Mutable section fields, shared by create and update
#[derive(Debug, Clone)]
pub struct SectionInput {
    pub name: String,
    pub slug: String,
    pub section_type: SectionType,
    pub priority: i32,
}

impl SectionService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: SectionInput) -> Result<section::Model, ServiceError> {
        if self.name_taken(&input.name, None).await? {
            return Err(ServiceError::Conflict("Section".to_string()));
        }

        let now = Utc::now();
        let model = section::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(input.slug),
            section_type: Set(input.section_type),
            priority: Set(input.priority),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        info!(section_id = %created.id, "section created");
        Ok(created)
    }

    pub async fn list(
        &self,
        page: &PageRequest,
        type_filter: Option<SectionType>,
    ) -> Result<PagedResult<section::Model>, ServiceError> {
        let mut query = section::Entity::find();

        if let Some(keyword) = page.keyword.as_deref().filter(|k| !k.is_empty()) {
            let pattern = format!("%{}%", keyword.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    section::Entity,
                    section::Column::Name,
                ))))
                .like(pattern),
            );
        }
        if let Some(section_type) = type_filter {
            query = query.filter(section::Column::SectionType.eq(section_type));
        }

        let total = query.clone().count(&*self.db).await?;

        let sort_column = match page.sort_by {
            SortField::CreatedAt => section::Column::CreatedAt,
            SortField::Priority => section::Column::Priority,
        };
        let items = query
            .order_by(sort_column, page.sort.into())
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await?;

        Ok(PagedResult { items, total })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<section::Model, ServiceError> {
        section::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Section".to_string()))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<section::Model, ServiceError> {
        section::Entity::find()
            .filter(section::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Section".to_string()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: SectionInput,
    ) -> Result<section::Model, ServiceError> {
        let existing = self.get_by_id(id).await?;

        if self.name_taken(&input.name, Some(id)).await? {
            return Err(ServiceError::Conflict("Section".to_string()));
        }

        let mut model: section::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.slug = Set(input.slug);
        model.section_type = Set(input.section_type);
        model.priority = Set(input.priority);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get_by_id(id).await?;
        section::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        info!(section_id = %id, "section deleted");
        Ok(())
    }

    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
        let mut query = section::Entity::find().filter(section::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(section::Column::Id.ne(id));
        }
        Ok(query.one(&*self.db).await?.is_some())
    }
}
