use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser,
    categories::repo_types::Category,
    error::{ApiError, ApiResult},
    products::{
        dto::{CreateProductRequest, ProductWithCategory, UpdateProductRequest},
        repo_types::Product,
    },
    state::AppState,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

// --- handlers ---

/// A product write may only reference a category that exists and is active at
/// the moment of this check. The check and the write are separate statements,
/// not a transaction, so a category deleted in between still slips through.
async fn ensure_category_active(state: &AppState, category_id: Uuid) -> ApiResult<()> {
    if Category::find_active_by_id(&state.db, category_id)
        .await?
        .is_none()
    {
        warn!(category_id = %category_id, "product write references missing or deleted category");
        return Err(ApiError::NotFound("Category not found".into()));
    }
    Ok(())
}

#[instrument(skip(state, user, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    let (price, category_id) = match (payload.price, payload.category_id) {
        (Some(price), Some(category_id)) if !name.is_empty() => (price, category_id),
        _ => {
            return Err(ApiError::Validation(
                "Name, price & category required".into(),
            ))
        }
    };
    let stock = payload.stock.unwrap_or(0);

    if price < Decimal::ZERO {
        return Err(ApiError::Validation("Price must be non-negative".into()));
    }
    if stock < 0 {
        return Err(ApiError::Validation("Stock must be non-negative".into()));
    }

    ensure_category_active(&state, category_id).await?;

    let product = Product::create(&state.db, name, price, stock, category_id).await?;
    info!(product_id = %product.id, category_id = %category_id, user_id = %user.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, _user))]
pub async fn list_products(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<ProductWithCategory>>> {
    let rows = Product::list_active(&state.db).await?;
    let items = rows
        .into_iter()
        .map(|(product, category)| ProductWithCategory { product, category })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, _user))]
pub async fn get_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProductWithCategory>> {
    let (product, category) = Product::find_active_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".into()))?;
    Ok(Json(ProductWithCategory { product, category }))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> ApiResult<Json<Product>> {
    // The product has to exist before anything else is judged.
    if Product::find_active_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("Not found".into()));
    }

    let name = match payload.name.as_deref().map(str::trim) {
        Some("") => return Err(ApiError::Validation("Name required".into())),
        other => other,
    };
    if payload.price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(ApiError::Validation("Price must be non-negative".into()));
    }
    if payload.stock.is_some_and(|s| s < 0) {
        return Err(ApiError::Validation("Stock must be non-negative".into()));
    }

    // Changing the reference re-runs the category check.
    if let Some(category_id) = payload.category_id {
        ensure_category_active(&state, category_id).await?;
    }

    let product = Product::update(
        &state.db,
        id,
        name,
        payload.price,
        payload.stock,
        payload.category_id,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Not found".into()))?;
    Ok(Json(product))
}

#[instrument(skip(state, user))]
pub async fn delete_product(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    if !Product::soft_delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Not found".into()));
    }

    info!(product_id = %id, user_id = %user.id, "product deleted");
    Ok(Json(json!({ "message": "Product deleted" })))
}
