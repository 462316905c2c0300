use mealkit_db::table::Cart as CartIden;
use mealkit_shared::{Error, OrNotFound, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool, prelude::FromRow};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

use crate::cart_item::{self, CartItem, ItemInput};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CartStatus {
    #[default]
    Active,
    Used,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub status: CartStatus,
    pub total_price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(FromRow)]
struct CartRow {
    id: i64,
    user_id: i64,
    status: sqlx::types::Text<CartStatus>,
    total_price: f64,
    created_at: i64,
    updated_at: i64,
}

impl From<CartRow> for Cart {
    fn from(row: CartRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            status: row.status.0,
            total_price: row.total_price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartDetail {
    pub cart: Cart,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub total_amount: f64,
    pub total_quantity: i64,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            CartIden::Id,
            CartIden::UserId,
            CartIden::Status,
            CartIden::TotalPrice,
            CartIden::CreatedAt,
            CartIden::UpdatedAt,
        ])
        .from(CartIden::Table)
        .to_owned()
}

async fn find_active<'e>(executor: impl SqliteExecutor<'e>, user_id: i64) -> Result<Option<Cart>> {
    let statement = select()
        .and_where(Expr::col(CartIden::UserId).eq(user_id))
        .and_where(Expr::col(CartIden::Status).eq(CartStatus::Active.as_ref()))
        .order_by(CartIden::Id, Order::Desc)
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, CartRow, _>(&sql, values)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Cart::from))
}

async fn create_active(conn: &mut SqliteConnection, user_id: i64) -> Result<i64> {
    let now = mealkit_shared::now();
    let statement = Query::insert()
        .into_table(CartIden::Table)
        .columns([
            CartIden::UserId,
            CartIden::Status,
            CartIden::TotalPrice,
            CartIden::CreatedAt,
            CartIden::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            CartStatus::Active.as_ref().into(),
            0.0.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    tracing::info!(user_id, cart_id = result.last_insert_rowid(), "active cart created");

    Ok(result.last_insert_rowid())
}

/// Returns `(Σ price × quantity, Σ quantity)` over the items of `cart_id`.
async fn totals<'e>(executor: impl SqliteExecutor<'e>, cart_id: i64) -> Result<(f64, i64)> {
    Ok(sqlx::query_as::<_, (f64, i64)>(
        "SELECT COALESCE(SUM(price * quantity), 0.0), COALESCE(SUM(quantity), 0) FROM cart_item WHERE cart_id = ?",
    )
    .bind(cart_id)
    .fetch_one(executor)
    .await?)
}

async fn recompute_total(conn: &mut SqliteConnection, cart_id: i64) -> Result<()> {
    let (total_price, _) = totals(&mut *conn, cart_id).await?;

    let statement = Query::update()
        .table(CartIden::Table)
        .value(CartIden::TotalPrice, total_price)
        .value(CartIden::UpdatedAt, mealkit_shared::now())
        .and_where(Expr::col(CartIden::Id).eq(cart_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

/// Marks an active cart as consumed by a checkout. Runs inside the caller's
/// transaction and fails when the cart is no longer active, so a cart backs
/// at most one transaction.
pub(crate) async fn mark_used(conn: &mut SqliteConnection, cart_id: i64) -> Result<()> {
    let statement = Query::update()
        .table(CartIden::Table)
        .value(CartIden::Status, CartStatus::Used.as_ref())
        .value(CartIden::UpdatedAt, mealkit_shared::now())
        .and_where(Expr::col(CartIden::Id).eq(cart_id))
        .and_where(Expr::col(CartIden::Status).eq(CartStatus::Active.as_ref()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    if result.rows_affected() == 0 {
        tracing::warn!(cart_id, "cart already checked out");

        return Err(Error::ValidationFailed(
            "cart was already checked out".to_owned(),
        ));
    }

    Ok(())
}

impl Repository {
    pub async fn find(&self, id: i64) -> Result<Option<Cart>> {
        let statement = select()
            .and_where(Expr::col(CartIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, CartRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Cart::from))
    }

    pub async fn get_active(&self, user_id: i64) -> Result<Cart> {
        find_active(&self.0, user_id).await?.or_not_found()
    }

    /// Loads a cart and checks it belongs to `user_id`.
    pub async fn get_owned(&self, user_id: i64, id: i64) -> Result<Cart> {
        let cart = self.find(id).await?.or_not_found()?;
        if cart.user_id != user_id {
            tracing::warn!(user_id, cart_id = id, "cart owned by another user");

            return Err(Error::Forbidden);
        }

        Ok(cart)
    }

    pub async fn items(&self, cart_id: i64) -> Result<Vec<CartItem>> {
        cart_item::list(&self.0, cart_id).await
    }

    pub async fn active_detail(&self, user_id: i64) -> Result<CartDetail> {
        let cart = self.get_active(user_id).await?;
        let items = self.items(cart.id).await?;

        Ok(CartDetail { cart, items })
    }

    pub async fn owned_detail(&self, user_id: i64, id: i64) -> Result<CartDetail> {
        let cart = self.get_owned(user_id, id).await?;
        let items = self.items(cart.id).await?;

        Ok(CartDetail { cart, items })
    }

    /// Totals over the active cart. A user without an active cart has an
    /// empty one.
    pub async fn summary(&self, user_id: i64) -> Result<CartSummary> {
        let Some(cart) = find_active(&self.0, user_id).await? else {
            return Ok(CartSummary::default());
        };

        let (total_amount, total_quantity) = totals(&self.0, cart.id).await?;

        Ok(CartSummary {
            total_amount,
            total_quantity,
        })
    }

    /// Adds an item to the user's active cart, opening one when needed.
    pub async fn add_item(&self, user_id: i64, input: ItemInput) -> Result<CartItem> {
        input.validate()?;

        let mut tx = self.0.begin().await?;

        let cart_id = match find_active(&mut *tx, user_id).await? {
            Some(cart) => cart.id,
            None => create_active(&mut tx, user_id).await?,
        };

        let id = cart_item::insert(&mut tx, cart_id, input).await?;
        recompute_total(&mut tx, cart_id).await?;
        let item = cart_item::find(&mut *tx, id).await?.or_not_found()?;

        tx.commit().await?;

        Ok(item)
    }

    async fn get_owned_item(&self, user_id: i64, item_id: i64) -> Result<CartItem> {
        let item = cart_item::find(&self.0, item_id).await?.or_not_found()?;
        self.get_owned(user_id, item.cart_id).await?;

        Ok(item)
    }

    pub async fn update_item_quantity(
        &self,
        user_id: i64,
        item_id: i64,
        quantity: i64,
    ) -> Result<CartItem> {
        cart_item::QuantityInput { quantity }.validate()?;
        let item = self.get_owned_item(user_id, item_id).await?;

        let mut tx = self.0.begin().await?;
        cart_item::set_quantity(&mut tx, item.id, quantity).await?;
        recompute_total(&mut tx, item.cart_id).await?;
        let item = cart_item::find(&mut *tx, item.id).await?.or_not_found()?;
        tx.commit().await?;

        Ok(item)
    }

    pub async fn delete_item(&self, user_id: i64, item_id: i64) -> Result<()> {
        let item = self.get_owned_item(user_id, item_id).await?;

        let mut tx = self.0.begin().await?;
        cart_item::delete(&mut tx, item.id).await?;
        recompute_total(&mut tx, item.cart_id).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Deletes a cart together with its items.
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        self.get_owned(user_id, id).await?;

        let statement = Query::delete()
            .from_table(CartIden::Table)
            .and_where(Expr::col(CartIden::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
