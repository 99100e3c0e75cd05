use crate::categories::repo_types::Category;
use sqlx::PgPool;
use uuid::Uuid;

impl Category {
    pub async fn create(db: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(db)
        .await
    }

    pub async fn list_active(db: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE deleted_at IS NULL
            ORDER BY created_at
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Look up one active category. This is also the existence check run
    /// before any product write that references a category.
    pub async fn find_active_by_id(db: &PgPool, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Apply the provided fields to an active row; absent fields keep their
    /// value. Returns None when no active row matches.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: Option<&str>,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name), updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(db)
        .await
    }

    /// Flip the deletion marker instead of removing the row. Products that
    /// reference this category keep their reference; their reads simply stop
    /// resolving it.
    pub async fn soft_delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE categories
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
