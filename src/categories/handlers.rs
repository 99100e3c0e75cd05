use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser,
    categories::{
        dto::{CreateCategoryRequest, UpdateCategoryRequest},
        repo_types::Category,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(get_category))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/:id", put(update_category).delete(delete_category))
}

// --- handlers ---

#[instrument(skip(state, user, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::Validation("Name required".into()));
    }

    let category = Category::create(&state.db, name).await?;
    info!(category_id = %category.id, user_id = %user.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, _user))]
pub async fn list_categories(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = Category::list_active(&state.db).await?;
    Ok(Json(categories))
}

#[instrument(skip(state, _user))]
pub async fn get_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Category>> {
    let category = Category::find_active_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".into()))?;
    Ok(Json(category))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<Category>> {
    // A provided-but-blank name is rejected; an absent one leaves the field
    // alone.
    let name = match payload.name.as_deref().map(str::trim) {
        Some("") => return Err(ApiError::Validation("Name required".into())),
        other => other,
    };

    let category = Category::update(&state.db, id, name)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".into()))?;
    Ok(Json(category))
}

#[instrument(skip(state, user))]
pub async fn delete_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    if !Category::soft_delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Not found".into()));
    }

    info!(category_id = %id, user_id = %user.id, "category deleted");
    Ok(Json(json!({ "message": "Category deleted" })))
}
