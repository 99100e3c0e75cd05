use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::categories::repo_types::Category;

/// Product record in the database. `category_id` is the stored reference; it
/// survives the category's soft deletion and may therefore point at a row
/// that reads no longer resolve.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Flat row produced by the read-time join against active categories. The
/// category columns are NULL when the reference no longer resolves.
#[derive(Debug, FromRow)]
pub struct ProductJoinRow {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub cat_id: Option<Uuid>,
    pub cat_name: Option<String>,
    pub cat_created_at: Option<OffsetDateTime>,
    pub cat_updated_at: Option<OffsetDateTime>,
}

impl ProductJoinRow {
    pub fn split(self) -> (Product, Option<Category>) {
        let category = match (self.cat_id, self.cat_name, self.cat_created_at, self.cat_updated_at)
        {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(Category {
                id,
                name,
                created_at,
                updated_at,
            }),
            _ => None,
        };
        (
            Product {
                id: self.id,
                name: self.name,
                price: self.price,
                stock: self.stock,
                category_id: self.category_id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            category,
        )
    }
}
