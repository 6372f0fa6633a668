//! Database-backed services. Each service holds a shared connection pool
//! and exposes the catalog operations the HTTP layer composes.

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

pub mod categories;
pub mod products;
pub mod sections;
pub mod users;

pub use categories::CategoryService;
pub use products::ProductService;
pub use sections::SectionService;
pub use users::UserService;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Sortable fields shared by all catalog entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortField {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "priority")]
    Priority,
}

impl Default for SortField {
    fn default() -> Self {
        SortField::Priority
    }
}

/// Normalized paging/sorting input for list operations
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    pub sort: SortOrder,
    pub sort_by: SortField,
    pub keyword: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            sort: SortOrder::default(),
            sort_by: SortField::default(),
            keyword: None,
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }
}

/// One page of results plus the unpaged total
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PagedResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Flattened `{ id, slug }` reference to a related record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: uuid::Uuid,
    pub slug: String,
}

/// Aggregate of all services, built once per application
#[derive(Clone)]
pub struct AppServices {
    pub sections: SectionService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub users: UserService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            sections: SectionService::new(db.clone()),
            categories: CategoryService::new(db.clone()),
            products: ProductService::new(db.clone()),
            users: UserService::new(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_offset() {
        let req = PageRequest {
            page: 3,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(req.offset(), 20);

        let first = PageRequest::default();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn sort_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.sort, SortOrder::Asc);
        assert_eq!(req.sort_by, SortField::Priority);
    }
}
