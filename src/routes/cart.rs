use axum::{extract::State, response::IntoResponse};
use mealkit_order::cart_item::{ItemInput, QuantityInput};

use super::{AppState, JsonBody, PathParam};
use crate::{
    auth::AuthUser,
    error::{ApiResult, created, ok},
};

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn active(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let detail = state.carts.active_detail(user.user_id).await?;

    Ok(ok("Cart fetched successfully", detail))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn summary(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let summary = state.carts.summary(user.user_id).await?;

    Ok(ok("Cart summary fetched successfully", summary))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn detail(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let detail = state.carts.owned_detail(user.user_id, id).await?;

    Ok(ok("Cart fetched successfully", detail))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn add_item(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<ItemInput>,
) -> ApiResult<impl IntoResponse> {
    let item = state.carts.add_item(user.user_id, input).await?;

    Ok(created("Item added to cart", item))
}

/// POST /cart/{id} where `id` is the cart item.
#[tracing::instrument(skip(state, user, input), fields(user_id = user.user_id))]
pub async fn update_quantity(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(input): JsonBody<QuantityInput>,
) -> ApiResult<impl IntoResponse> {
    let item = state
        .carts
        .update_item_quantity(user.user_id, id, input.quantity)
        .await?;

    Ok(ok("Cart item updated successfully", item))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    state.carts.delete_item(user.user_id, id).await?;

    Ok(ok("Cart item deleted successfully", ()))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    state.carts.delete(user.user_id, id).await?;

    Ok(ok("Cart deleted successfully", ()))
}
