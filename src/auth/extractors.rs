use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Identity resolved from a bearer token, attached to the request for
/// downstream handlers. Every store operation goes through this gate.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Pull the token out of an Authorization header value. Empty tokens do not
/// count as present.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .filter(|token| !token.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Read Authorization header
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        // Expect "Bearer <token>"
        let token = bearer_token(header)
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        // Exact match against the stored column; a token overwritten by a
        // newer login or held by a soft-deleted user misses here.
        match User::find_active_by_token(&state.db, token).await? {
            Some(user) => Ok(CurrentUser {
                id: user.id,
                name: user.name,
                email: user.email,
            }),
            None => {
                warn!("request with unknown or stale token");
                Err(ApiError::Unauthorized("Invalid token".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_scheme() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("bearer abc123"), Some("abc123"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("abc123"), None);
    }

    #[test]
    fn bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
    }
}
