use axum::{extract::State, response::IntoResponse};
use mealkit_user::personalisasi::PreferencesInput;

use super::{AppState, JsonBody};
use crate::{
    auth::AuthUser,
    error::{ApiResult, ok},
};

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn get(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let preferences = state.personalisasi.get(user.user_id).await?;

    Ok(ok("Personalisasi fetched successfully", preferences))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<PreferencesInput>,
) -> ApiResult<impl IntoResponse> {
    let preferences = state.personalisasi.upsert(user.user_id, input).await?;

    Ok(ok("Personalisasi saved successfully", preferences))
}
