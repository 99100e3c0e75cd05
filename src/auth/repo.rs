use crate::auth::repo_types::User;
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find an active user by email. Soft-deleted rows do not count, so a
    /// deleted account's address can be registered again.
    pub async fn find_active_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password. The session token starts out
    /// NULL; only a login fills it in.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Store a freshly minted session token, overwriting whatever was there.
    /// Concurrent logins race on this column and the last write wins; any
    /// token handed out earlier stops matching from that point on.
    pub async fn set_token(db: &PgPool, user_id: Uuid, token: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET token = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(token)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Resolve a presented token to its active holder by exact match. Returns
    /// None for unknown tokens, stale tokens overwritten by a newer login,
    /// and tokens whose holder has been soft-deleted.
    pub async fn find_active_by_token(
        db: &PgPool,
        token: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE token = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await
    }
}
