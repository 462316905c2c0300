use mealkit_db::table::Banner as BannerIden;
use mealkit_shared::{Args, OrNotFound, Page, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image_url: String,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            BannerIden::Id,
            BannerIden::Title,
            BannerIden::ImageUrl,
            BannerIden::CreatedAt,
            BannerIden::UpdatedAt,
        ])
        .from(BannerIden::Table)
        .to_owned()
}

impl Repository {
    pub async fn fetch(&self, args: Args) -> Result<Page<Banner>> {
        let statement = select()
            .and_where(Expr::col(BannerIden::Id).gt(args.after))
            .order_by(BannerIden::Id, Order::Asc)
            .limit(args.limit)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let banners = sqlx::query_as_with::<_, Banner, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(Page::new(banners, &args, |banner| banner.id))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Banner> {
        let statement = select()
            .and_where(Expr::col(BannerIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Banner, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .or_not_found()
    }

    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(BannerIden::Table)
            .columns([
                BannerIden::Title,
                BannerIden::ImageUrl,
                BannerIden::CreatedAt,
                BannerIden::UpdatedAt,
            ])
            .values_panic([
                input.title.into(),
                input.image_url.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }
}
