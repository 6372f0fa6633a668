use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{EntityRef, PageRequest, PagedResult, SortField};
use crate::entities::{category, section};
use crate::errors::ServiceError;

/// CRUD over the two-level category tree
#[derive(Clone)]
pub struct CategoryService {
    db: Arc<DatabaseConnection>,
}

/// Mutable category fields, shared by create and update.
/// `level` is derived from `parent_id` presence, never supplied.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub priority: i32,
    pub parent_id: Option<Uuid>,
    pub section_id: Option<Uuid>,
}

/// Entity filters for category listing
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub level: Option<i32>,
    pub parent_id: Option<Uuid>,
    pub section_id: Option<Uuid>,
}

/// Category plus its flattened relations and direct-child count
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub category: category::Model,
    pub section: Option<EntityRef>,
    pub parent: Option<EntityRef>,
    pub children_length: u64,
}

#[derive(FromQueryResult)]
struct ChildCount {
    parent_id: Option<Uuid>,
    cnt: i64,
}

impl CategoryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CategoryInput) -> Result<CategoryView, ServiceError> {
        if self.name_taken(&input.name, None).await? {
            return Err(ServiceError::Conflict("Category".to_string()));
        }

        let now = Utc::now();
        let model = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(input.slug),
            description: Set(input.description),
            image_url: Set(input.image_url),
            priority: Set(input.priority),
            level: Set(derive_level(input.parent_id)),
            parent_id: Set(input.parent_id),
            section_id: Set(input.section_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        info!(category_id = %created.id, "category created");
        self.into_view(created).await
    }

    pub async fn list(
        &self,
        page: &PageRequest,
        filter: &CategoryFilter,
    ) -> Result<PagedResult<CategoryView>, ServiceError> {
        let mut query = category::Entity::find();

        if let Some(keyword) = page.keyword.as_deref().filter(|k| !k.is_empty()) {
            let pattern = format!("%{}%", keyword.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    category::Entity,
                    category::Column::Name,
                ))))
                .like(pattern),
            );
        }
        if let Some(level) = filter.level {
            query = query.filter(category::Column::Level.eq(level));
        }
        if let Some(parent_id) = filter.parent_id {
            query = query.filter(category::Column::ParentId.eq(parent_id));
        }
        if let Some(section_id) = filter.section_id {
            query = query.filter(category::Column::SectionId.eq(section_id));
        }

        let total = query.clone().count(&*self.db).await?;

        let sort_column = match page.sort_by {
            SortField::CreatedAt => category::Column::CreatedAt,
            SortField::Priority => category::Column::Priority,
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

    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryView, ServiceError> {
        let model = category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;
        self.into_view(model).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryView, ServiceError> {
        let model = category::Entity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;
        self.into_view(model).await
    }

    pub async fn update(&self, id: Uuid, input: CategoryInput) -> Result<CategoryView, ServiceError> {
        let existing = category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;

        if self.name_taken(&input.name, Some(id)).await? {
            return Err(ServiceError::Conflict("Category".to_string()));
        }

        let mut model: category::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.slug = Set(input.slug);
        model.description = Set(input.description);
        model.image_url = Set(input.image_url);
        model.priority = Set(input.priority);
        model.level = Set(derive_level(input.parent_id));
        model.parent_id = Set(input.parent_id);
        model.section_id = Set(input.section_id);
        model.updated_at = Set(Utc::now());

        let updated = model.update(&*self.db).await?;
        self.into_view(updated).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;

        category::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        info!(category_id = %id, "category deleted");
        Ok(())
    }

    async fn into_view(&self, model: category::Model) -> Result<CategoryView, ServiceError> {
        let mut views = self.shape_views(vec![model]).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::InternalError("category view shaping failed".to_string()))
    }

    /// Batch-load the section refs, parent refs and direct-child counts for
    /// one page of categories.
    async fn shape_views(
        &self,
        models: Vec<category::Model>,
    ) -> Result<Vec<CategoryView>, ServiceError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let section_ids: Vec<Uuid> = models.iter().filter_map(|m| m.section_id).collect();
        let parent_ids: Vec<Uuid> = models.iter().filter_map(|m| m.parent_id).collect();

        let section_refs: HashMap<Uuid, EntityRef> = if section_ids.is_empty() {
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
                        EntityRef {
                            id: s.id,
                            slug: s.slug,
                        },
                    )
                })
                .collect()
        };

        let parent_refs: HashMap<Uuid, EntityRef> = if parent_ids.is_empty() {
            HashMap::new()
        } else {
            category::Entity::find()
                .filter(category::Column::Id.is_in(parent_ids))
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

        let child_counts: HashMap<Uuid, u64> = category::Entity::find()
            .select_only()
            .column(category::Column::ParentId)
            .column_as(category::Column::Id.count(), "cnt")
            .filter(category::Column::ParentId.is_in(ids))
            .group_by(category::Column::ParentId)
            .into_model::<ChildCount>()
            .all(&*self.db)
            .await?
            .into_iter()
            .filter_map(|row| row.parent_id.map(|pid| (pid, row.cnt.max(0) as u64)))
            .collect();

        Ok(models
            .into_iter()
            .map(|model| {
                let section = model.section_id.and_then(|id| section_refs.get(&id).cloned());
                let parent = model.parent_id.and_then(|id| parent_refs.get(&id).cloned());
                let children_length = child_counts.get(&model.id).copied().unwrap_or(0);
                CategoryView {
                    category: model,
                    section,
                    parent,
                    children_length,
                }
            })
            .collect())
    }

    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
        let mut query = category::Entity::find().filter(category::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(category::Column::Id.ne(id));
        }
        Ok(query.one(&*self.db).await?.is_some())
    }
}

fn derive_level(parent_id: Option<Uuid>) -> i32 {
    if parent_id.is_some() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_parent_presence() {
        assert_eq!(derive_level(None), 0);
        assert_eq!(derive_level(Some(Uuid::new_v4())), 1);
    }
}
