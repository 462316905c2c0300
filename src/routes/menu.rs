use axum::{extract::State, response::IntoResponse};
use mealkit_catalog::menu::{Menu, Needs};
use mealkit_shared::{Args, Page};
use serde::{Deserialize, Serialize};

use super::{AppState, PathParam, QueryParams};
use crate::{
    auth::AuthUser,
    error::{ApiResult, ok},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub cursor: Option<String>,
    pub num: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Serialize)]
struct MenuList {
    menus: Vec<Menu>,
    #[serde(rename = "nextCursor")]
    next_cursor: String,
}

impl From<Page<Menu>> for MenuList {
    fn from(page: Page<Menu>) -> Self {
        Self {
            next_cursor: page.cursor_or_empty(),
            menus: page.items,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    let args = Args::parse(query.cursor.as_deref(), query.num)?;
    let page = state
        .catalog
        .menus
        .fetch(args, query.search.as_deref())
        .await?;

    Ok(ok("Successfully Get Menu!", MenuList::from(page)))
}

#[tracing::instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<impl IntoResponse> {
    let menu = state.catalog.menus.get_by_id(id).await?;

    Ok(ok("Menu fetched successfully", menu))
}

#[tracing::instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i64>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let menus = state
        .catalog
        .menus
        .get_by_category_id(category_id, query.search.as_deref())
        .await?;

    Ok(ok("Menu fetched successfully", menus))
}

#[tracing::instrument(skip(state, user), fields(user_id = user.user_id))]
pub async fn recommendation(
    State(state): State<AppState>,
    user: AuthUser,
    QueryParams(query): QueryParams<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    let args = Args::parse(query.cursor.as_deref(), query.num)?;
    let preferences = state.personalisasi.get(user.user_id).await?;
    let page = state
        .catalog
        .menus
        .recommend(args, query.search.as_deref(), Needs::from(&preferences))
        .await?;

    Ok(ok(
        "Successfully fetched menu recommendations",
        MenuList::from(page),
    ))
}
