use axum::{extract::State, response::IntoResponse};
use mealkit_catalog::banner::Banner;
use mealkit_shared::{Args, Page};
use serde::{Deserialize, Serialize};

use super::{AppState, PathParam, QueryParams};
use crate::error::{ApiResult, ok};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub cursor: Option<String>,
    pub num: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NutritionQuery {
    #[serde(default)]
    pub classification: String,
}

#[derive(Serialize)]
struct BannerList {
    banners: Vec<Banner>,
    #[serde(rename = "nextCursor")]
    next_cursor: String,
}

impl From<Page<Banner>> for BannerList {
    fn from(page: Page<Banner>) -> Self {
        Self {
            next_cursor: page.cursor_or_empty(),
            banners: page.items,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn banners(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> ApiResult<impl IntoResponse> {
    let args = Args::parse(query.cursor.as_deref(), query.num)?;
    let page = state.catalog.banners.fetch(args).await?;

    Ok(ok("Successfully Get Banners!", BannerList::from(page)))
}

#[tracing::instrument(skip(state))]
pub async fn banner(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let banner = state.catalog.banners.get_by_id(id).await?;

    Ok(ok("Banner fetched successfully", banner))
}

pub async fn categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = state.catalog.categories.fetch().await?;

    Ok(ok("Categories fetched successfully", categories))
}

#[tracing::instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let category = state.catalog.categories.get_by_id(id).await?;

    Ok(ok("Category fetched successfully", category))
}

pub async fn couriers(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let couriers = state.catalog.couriers.fetch().await?;

    Ok(ok("Couriers fetched successfully", couriers))
}

#[tracing::instrument(skip(state))]
pub async fn courier(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let courier = state.catalog.couriers.get_by_id(id).await?;

    Ok(ok("Courier fetched successfully", courier))
}

#[tracing::instrument(skip(state))]
pub async fn nutrition(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NutritionQuery>,
) -> ApiResult<impl IntoResponse> {
    let nutrition = state
        .catalog
        .nutrition
        .get_by_classification(&query.classification)
        .await?;

    Ok(ok("Nutrition fetched successfully", nutrition))
}
