use mealkit_db::table::Courier as CourierIden;
use mealkit_shared::{OrNotFound, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Courier {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            CourierIden::Id,
            CourierIden::Name,
            CourierIden::Logo,
            CourierIden::Price,
            CourierIden::CreatedAt,
            CourierIden::UpdatedAt,
        ])
        .from(CourierIden::Table)
        .to_owned()
}

impl Repository {
    pub async fn fetch(&self) -> Result<Vec<Courier>> {
        let statement = select().order_by(CourierIden::Id, Order::Asc).to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Courier, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Courier> {
        let statement = select()
            .and_where(Expr::col(CourierIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Courier, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .or_not_found()
    }

    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(CourierIden::Table)
            .columns([
                CourierIden::Name,
                CourierIden::Logo,
                CourierIden::Price,
                CourierIden::CreatedAt,
                CourierIden::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                input.logo.into(),
                input.price.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }
}
