use mealkit_db::table::{Category as CategoryIden, CategoryMenu};
use mealkit_shared::{OrNotFound, Result};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            CategoryIden::Id,
            CategoryIden::Name,
            CategoryIden::ImageUrl,
            CategoryIden::CreatedAt,
            CategoryIden::UpdatedAt,
        ])
        .from(CategoryIden::Table)
        .to_owned()
}

impl Repository {
    pub async fn fetch(&self) -> Result<Vec<Category>> {
        let statement = select().order_by(CategoryIden::Id, Order::Asc).to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category> {
        let statement = select()
            .and_where(Expr::col(CategoryIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .or_not_found()
    }

    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(CategoryIden::Table)
            .columns([
                CategoryIden::Name,
                CategoryIden::ImageUrl,
                CategoryIden::CreatedAt,
                CategoryIden::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                input.image_url.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn attach_menu(&self, category_id: i64, menu_id: i64) -> Result<()> {
        let statement = Query::insert()
            .into_table(CategoryMenu::Table)
            .columns([CategoryMenu::CategoryId, CategoryMenu::MenuId])
            .values_panic([category_id.into(), menu_id.into()])
            .on_conflict(
                OnConflict::columns([CategoryMenu::CategoryId, CategoryMenu::MenuId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
