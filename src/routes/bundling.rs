use axum::{extract::State, response::IntoResponse};
use mealkit_catalog::bundling::{
    Bundling,
    grouping::{group_by_day, group_by_week},
};
use mealkit_shared::{Args, Page};
use serde::{Deserialize, Serialize};

use super::{AppState, PathParam, QueryParams};
use crate::error::{ApiResult, ok};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub cursor: Option<String>,
    pub num: Option<i64>,
}

#[derive(Serialize)]
struct BundlingList {
    bundlings: Vec<Bundling>,
    #[serde(rename = "nextCursor")]
    next_cursor: String,
}

impl From<Page<Bundling>> for BundlingList {
    fn from(page: Page<Bundling>) -> Self {
        Self {
            next_cursor: page.cursor_or_empty(),
            bundlings: page.items,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    let args = Args::parse(query.cursor.as_deref(), query.num)?;
    let page = state.catalog.bundlings.fetch(args).await?;

    Ok(ok("Successfully Get Bundlings!", BundlingList::from(page)))
}

#[tracing::instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let bundling = state.catalog.bundlings.get_by_id(id).await?;

    Ok(ok("Bundling fetched successfully", bundling))
}

/// Hydrated bundling menus grouped by day.
#[tracing::instrument(skip(state))]
pub async fn menus(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let rows = state.catalog.bundlings.fetch_bundling_menus(id).await?;

    Ok(ok("Bundling menu fetched successfully", group_by_day(rows)))
}

/// Hydrated menus of a monthly bundling grouped by week then day.
#[tracing::instrument(skip(state))]
pub async fn grouped(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let rows = state.catalog.bundlings.fetch_monthly_menus(id).await?;

    Ok(ok(
        "Bundling menu grouped by week and day fetched successfully",
        group_by_week(rows),
    ))
}
