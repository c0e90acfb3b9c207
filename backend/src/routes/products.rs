//! Product CRUD routes
//!
//! All four operations are keyed by the `name` query parameter and
//! require a valid bearer token. Handlers stay thin: extraction here,
//! semantics in `ProductService`.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::repositories::ProductRecord;
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockroom_shared::types::{ProductPayload, ProductResponse};

/// Query parameters identifying a product
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: String,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_product)
            .post(create_product)
            .put(update_product)
            .delete(delete_product),
    )
}

/// GET /api/v1/products?name= - Fetch a product by name
async fn get_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<ProductResponse>> {
    let record = ProductService::get(state.db(), &query.name).await?;
    Ok(Json(to_response(record)))
}

/// POST /api/v1/products - Create a product
async fn create_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<ProductResponse>> {
    let record = ProductService::create(state.db(), &payload).await?;
    Ok(Json(to_response(record)))
}

/// PUT /api/v1/products?name= - Replace all business fields of a product
async fn update_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ProductQuery>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<ProductResponse>> {
    let record = ProductService::update(state.db(), &query.name, &payload).await?;
    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/products?name= - Delete a product, returning its snapshot
async fn delete_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<ProductResponse>> {
    let record = ProductService::delete(state.db(), &query.name).await?;
    Ok(Json(to_response(record)))
}

fn to_response(record: ProductRecord) -> ProductResponse {
    ProductResponse {
        id: record.id,
        name: record.name,
        category: record.category,
        price: record.price,
        amount: record.amount,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
