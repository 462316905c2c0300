use mealkit_db::table::Address as AddressIden;
use mealkit_shared::{Error, OrNotFound, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub address: String,
    pub name: String,
    pub notes: String,
    pub phone: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddressInput {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub label: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: String,
    #[validate(length(min = 6, max = 20))]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInput {
    pub id: i64,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: AddressInput,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            AddressIden::Id,
            AddressIden::UserId,
            AddressIden::Label,
            AddressIden::Address,
            AddressIden::Name,
            AddressIden::Notes,
            AddressIden::Phone,
            AddressIden::CreatedAt,
            AddressIden::UpdatedAt,
        ])
        .from(AddressIden::Table)
        .to_owned()
}

impl Repository {
    pub async fn list(&self, user_id: i64) -> Result<Vec<Address>> {
        let statement = select()
            .and_where(Expr::col(AddressIden::UserId).eq(user_id))
            .order_by(AddressIden::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Address, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Address>> {
        let statement = select()
            .and_where(Expr::col(AddressIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Address, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Loads an address and checks it belongs to `user_id`.
    pub async fn get_owned(&self, user_id: i64, id: i64) -> Result<Address> {
        let address = self.find(id).await?.or_not_found()?;
        if address.user_id != user_id {
            tracing::warn!(user_id, address_id = id, "address owned by another user");

            return Err(Error::Forbidden);
        }

        Ok(address)
    }

    pub async fn create(&self, user_id: i64, input: AddressInput) -> Result<Address> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(AddressIden::Table)
            .columns([
                AddressIden::UserId,
                AddressIden::Label,
                AddressIden::Address,
                AddressIden::Name,
                AddressIden::Notes,
                AddressIden::Phone,
                AddressIden::CreatedAt,
                AddressIden::UpdatedAt,
            ])
            .values_panic([
                user_id.into(),
                input.label.into(),
                input.address.into(),
                input.name.into(),
                input.notes.into(),
                input.phone.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        self.find(id).await?.or_not_found()
    }

    pub async fn update(&self, user_id: i64, input: UpdateInput) -> Result<Address> {
        input.validate()?;
        self.get_owned(user_id, input.id).await?;

        let fields = input.fields;
        let statement = Query::update()
            .table(AddressIden::Table)
            .value(AddressIden::Label, fields.label)
            .value(AddressIden::Address, fields.address)
            .value(AddressIden::Name, fields.name)
            .value(AddressIden::Notes, fields.notes)
            .value(AddressIden::Phone, fields.phone)
            .value(AddressIden::UpdatedAt, mealkit_shared::now())
            .and_where(Expr::col(AddressIden::Id).eq(input.id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        self.find(input.id).await?.or_not_found()
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        self.get_owned(user_id, id).await?;

        let statement = Query::delete()
            .from_table(AddressIden::Table)
            .and_where(Expr::col(AddressIden::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
