use async_trait::async_trait;
use mealkit_db::table::{Bundling as BundlingIden, BundlingMenu as BundlingMenuIden};
use mealkit_shared::{Args, OrNotFound, Page, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

use super::{Bundling, BundlingMenu, BundlingType};
use crate::menu::{self, Menu};

/// Single-entity menu lookup used by the aggregator.
#[async_trait]
pub trait MenuReader: Send + Sync + 'static {
    async fn get_by_id(&self, id: i64) -> Result<Menu>;
}

/// Bundling lookups used by the aggregator.
#[async_trait]
pub trait BundlingReader: Send + Sync + 'static {
    async fn fetch(&self, args: Args) -> Result<Page<Bundling>>;

    async fn get_by_id(&self, id: i64) -> Result<Bundling>;

    /// Rows of `bundling_id` ordered by day, carrying only foreign keys.
    async fn fetch_bundling_menus(&self, bundling_id: i64) -> Result<Vec<BundlingMenu>>;
}

#[derive(FromRow)]
pub struct BundlingRow {
    pub id: i64,
    pub name: String,
    pub bundling_type: sqlx::types::Text<BundlingType>,
    pub price: f64,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<BundlingRow> for Bundling {
    fn from(row: BundlingRow) -> Self {
        Self {
            id: row.id,
            image_url: row.image_url,
            name: row.name,
            bundling_type: row.bundling_type.0,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
pub struct BundlingMenuRow {
    pub id: i64,
    pub bundling_id: i64,
    pub menu_id: i64,
    pub day_number: i64,
    pub meal_description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<BundlingMenuRow> for BundlingMenu {
    fn from(row: BundlingMenuRow) -> Self {
        Self {
            id: row.id,
            day_number: row.day_number,
            meal_description: row.meal_description,
            bundling: Bundling::placeholder(row.bundling_id),
            menu: Menu::placeholder(row.menu_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub bundling_type: BundlingType,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddMenuInput {
    pub bundling_id: i64,
    pub menu_id: i64,
    #[validate(range(min = 1))]
    pub day_number: i64,
    #[serde(default)]
    pub meal_description: String,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            BundlingIden::Id,
            BundlingIden::Name,
            BundlingIden::BundlingType,
            BundlingIden::Price,
            BundlingIden::ImageUrl,
            BundlingIden::CreatedAt,
            BundlingIden::UpdatedAt,
        ])
        .from(BundlingIden::Table)
        .to_owned()
}

impl Repository {
    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(BundlingIden::Table)
            .columns([
                BundlingIden::Name,
                BundlingIden::BundlingType,
                BundlingIden::Price,
                BundlingIden::ImageUrl,
                BundlingIden::CreatedAt,
                BundlingIden::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                input.bundling_type.as_ref().into(),
                input.price.into(),
                input.image_url.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn add_menu(&self, input: AddMenuInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(BundlingMenuIden::Table)
            .columns([
                BundlingMenuIden::BundlingId,
                BundlingMenuIden::MenuId,
                BundlingMenuIden::DayNumber,
                BundlingMenuIden::MealDescription,
                BundlingMenuIden::CreatedAt,
                BundlingMenuIden::UpdatedAt,
            ])
            .values_panic([
                input.bundling_id.into(),
                input.menu_id.into(),
                input.day_number.into(),
                input.meal_description.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl BundlingReader for Repository {
    async fn fetch(&self, args: Args) -> Result<Page<Bundling>> {
        let statement = select()
            .and_where(Expr::col(BundlingIden::Id).gt(args.after))
            .order_by(BundlingIden::Id, Order::Asc)
            .limit(args.limit)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, BundlingRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let bundlings = rows.into_iter().map(Bundling::from).collect();

        Ok(Page::new(bundlings, &args, |bundling| bundling.id))
    }

    async fn get_by_id(&self, id: i64) -> Result<Bundling> {
        let statement = select()
            .and_where(Expr::col(BundlingIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, BundlingRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(Bundling::from).or_not_found()
    }

    async fn fetch_bundling_menus(&self, bundling_id: i64) -> Result<Vec<BundlingMenu>> {
        let statement = Query::select()
            .columns([
                BundlingMenuIden::Id,
                BundlingMenuIden::BundlingId,
                BundlingMenuIden::MenuId,
                BundlingMenuIden::DayNumber,
                BundlingMenuIden::MealDescription,
                BundlingMenuIden::CreatedAt,
                BundlingMenuIden::UpdatedAt,
            ])
            .from(BundlingMenuIden::Table)
            .and_where(Expr::col(BundlingMenuIden::BundlingId).eq(bundling_id))
            .order_by(BundlingMenuIden::DayNumber, Order::Asc)
            .order_by(BundlingMenuIden::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, BundlingMenuRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(BundlingMenu::from).collect())
    }
}

#[async_trait]
impl MenuReader for menu::Repository {
    async fn get_by_id(&self, id: i64) -> Result<Menu> {
        menu::Repository::get_by_id(self, id).await
    }
}
