use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::categories::repo_types::Category;
use crate::products::repo_types::{Product, ProductJoinRow};

impl Product {
    pub async fn create(
        db: &PgPool,
        name: &str,
        price: Decimal,
        stock: i32,
        category_id: Uuid,
    ) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, stock, category_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(stock)
        .bind(category_id)
        .fetch_one(db)
        .await
    }

    /// List active products, each joined with its category as the category
    /// stands right now. A soft-deleted category joins as None even though
    /// the product still stores its id.
    pub async fn list_active(db: &PgPool) -> Result<Vec<(Product, Option<Category>)>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProductJoinRow>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id, p.created_at, p.updated_at,
                   c.id AS cat_id, c.name AS cat_name,
                   c.created_at AS cat_created_at, c.updated_at AS cat_updated_at
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL
            WHERE p.deleted_at IS NULL
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows.into_iter().map(ProductJoinRow::split).collect())
    }

    pub async fn find_active_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<(Product, Option<Category>)>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProductJoinRow>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id, p.created_at, p.updated_at,
                   c.id AS cat_id, c.name AS cat_name,
                   c.created_at AS cat_created_at, c.updated_at AS cat_updated_at
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL
            WHERE p.id = $1 AND p.deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row.map(ProductJoinRow::split))
    }

    /// Apply the provided fields to an active row; absent fields keep their
    /// value. Explicit zeros for price and stock arrive as Some and are
    /// written out as given.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: Option<&str>,
        price: Option<Decimal>,
        stock: Option<i32>,
        category_id: Option<Uuid>,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                stock = COALESCE($4, stock),
                category_id = COALESCE($5, category_id),
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, price, stock, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(stock)
        .bind(category_id)
        .fetch_optional(db)
        .await
    }

    pub async fn soft_delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
