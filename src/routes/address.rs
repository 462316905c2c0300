use axum::{extract::State, response::IntoResponse};
use mealkit_user::address::{AddressInput, UpdateInput};

use super::{AppState, JsonBody, PathParam};
use crate::{
    auth::AuthUser,
    error::{ApiResult, created, ok},
};

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn list(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let addresses = state.addresses.list(user.user_id).await?;

    Ok(ok("Addresses fetched successfully", addresses))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<AddressInput>,
) -> ApiResult<impl IntoResponse> {
    let address = state.addresses.create(user.user_id, input).await?;

    Ok(created("Address created successfully", address))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<UpdateInput>,
) -> ApiResult<impl IntoResponse> {
    let address = state.addresses.update(user.user_id, input).await?;

    Ok(ok("Address updated successfully", address))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    state.addresses.delete(user.user_id, id).await?;

    Ok(ok("Address deleted successfully", ()))
}
