use axum::{extract::State, response::IntoResponse};
use mealkit_order::transaction::CheckoutInput;

use super::{AppState, JsonBody, PathParam};
use crate::{
    auth::AuthUser,
    error::{ApiResult, created, ok},
};

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn checkout(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<CheckoutInput>,
) -> ApiResult<impl IntoResponse> {
    let checkout = state
        .transactions
        .checkout(user.user_id, &user.authorization(), input)
        .await?;

    Ok(created("Transaction created successfully", checkout))
}

/// Serves both GET /transaction and GET /history.
#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn list(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let transactions = state.transactions.repository().list(user.user_id).await?;

    Ok(ok("Transactions fetched successfully", transactions))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn ongoing(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let transactions = state
        .transactions
        .repository()
        .ongoing(user.user_id)
        .await?;

    Ok(ok("Ongoing transactions fetched successfully", transactions))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn detail(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let transaction = state
        .transactions
        .repository()
        .get_owned(user.user_id, id)
        .await?;

    Ok(ok("Transaction fetched successfully", transaction))
}
