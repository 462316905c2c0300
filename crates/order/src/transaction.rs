use std::sync::Arc;

use mealkit_catalog::courier;
use mealkit_db::table::Transaction as TransactionIden;
use mealkit_shared::{Error, OrNotFound, Result};
use mealkit_user::address;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool, prelude::FromRow};
use strum::{AsRefStr, Display, EnumString};
use validator::{Validate, ValidationError};

use crate::{
    cart,
    payment::{PaymentGateway, PaymentRequest},
};

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
pub enum TransactionStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub cart_id: i64,
    pub payment_id: i64,
    pub courier_id: i64,
    pub address_id: i64,
    pub status: TransactionStatus,
    pub amount: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(FromRow)]
struct TransactionRow {
    id: i64,
    user_id: i64,
    cart_id: i64,
    payment_id: i64,
    courier_id: i64,
    address_id: i64,
    status: sqlx::types::Text<TransactionStatus>,
    amount: f64,
    created_at: i64,
    updated_at: i64,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            cart_id: row.cart_id,
            payment_id: row.payment_id,
            courier_id: row.courier_id,
            address_id: row.address_id,
            status: row.status.0,
            amount: row.amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn validate_items(input: &CheckoutInput) -> std::result::Result<(), ValidationError> {
    let len = input.item_names.len();
    if len == 0 || input.item_qtys.len() != len || input.item_prices.len() != len {
        return Err(ValidationError::new("items_length_mismatch"));
    }

    if input.item_names.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("item_name_required"));
    }

    if input.item_qtys.iter().any(|qty| *qty <= 0) {
        return Err(ValidationError::new("item_qty_positive"));
    }

    if input.item_prices.iter().any(|price| *price <= 0.0) {
        return Err(ValidationError::new("item_price_positive"));
    }

    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_items"))]
pub struct CheckoutInput {
    pub courier_id: i64,
    pub address_id: i64,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub item_names: Vec<String>,
    #[serde(default)]
    pub item_qtys: Vec<i64>,
    #[serde(default)]
    pub item_prices: Vec<f64>,
}

impl CheckoutInput {
    fn payment_request(&self) -> PaymentRequest {
        PaymentRequest {
            amount: self.amount,
            name: self.item_names.clone(),
            qty: self.item_qtys.clone(),
            price: self.item_prices.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Checkout {
    pub transaction: Transaction,
    pub payment_url: String,
    pub reference_id: String,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            TransactionIden::Id,
            TransactionIden::UserId,
            TransactionIden::CartId,
            TransactionIden::PaymentId,
            TransactionIden::CourierId,
            TransactionIden::AddressId,
            TransactionIden::Status,
            TransactionIden::Amount,
            TransactionIden::CreatedAt,
            TransactionIden::UpdatedAt,
        ])
        .from(TransactionIden::Table)
        .to_owned()
}

struct NewTransaction {
    user_id: i64,
    cart_id: i64,
    payment_id: i64,
    courier_id: i64,
    address_id: i64,
    amount: f64,
}

async fn insert(conn: &mut SqliteConnection, new: NewTransaction) -> Result<i64> {
    let now = mealkit_shared::now();
    let statement = Query::insert()
        .into_table(TransactionIden::Table)
        .columns([
            TransactionIden::UserId,
            TransactionIden::CartId,
            TransactionIden::PaymentId,
            TransactionIden::CourierId,
            TransactionIden::AddressId,
            TransactionIden::Status,
            TransactionIden::Amount,
            TransactionIden::CreatedAt,
            TransactionIden::UpdatedAt,
        ])
        .values_panic([
            new.user_id.into(),
            new.cart_id.into(),
            new.payment_id.into(),
            new.courier_id.into(),
            new.address_id.into(),
            TransactionStatus::Pending.as_ref().into(),
            new.amount.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(result.last_insert_rowid())
}

impl Repository {
    /// The user's transactions, newest first.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let statement = select()
            .and_where(Expr::col(TransactionIden::UserId).eq(user_id))
            .order_by(TransactionIden::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, TransactionRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Pending and processing transactions of the user, newest first.
    pub async fn ongoing(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let statement = select()
            .and_where(Expr::col(TransactionIden::UserId).eq(user_id))
            .and_where(Expr::col(TransactionIden::Status).is_in([
                TransactionStatus::Pending.as_ref(),
                TransactionStatus::Processing.as_ref(),
            ]))
            .order_by(TransactionIden::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, TransactionRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    pub async fn find(&self, id: i64) -> Result<Option<Transaction>> {
        let statement = select()
            .and_where(Expr::col(TransactionIden::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, TransactionRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Transaction::from))
    }

    pub async fn get_owned(&self, user_id: i64, id: i64) -> Result<Transaction> {
        let transaction = self.find(id).await?.or_not_found()?;
        if transaction.user_id != user_id {
            tracing::warn!(user_id, transaction_id = id, "transaction owned by another user");

            return Err(Error::Forbidden);
        }

        Ok(transaction)
    }

    pub async fn update_status(&self, id: i64, status: TransactionStatus) -> Result<Transaction> {
        let statement = Query::update()
            .table(TransactionIden::Table)
            .value(TransactionIden::Status, status.as_ref())
            .value(TransactionIden::UpdatedAt, mealkit_shared::now())
            .and_where(Expr::col(TransactionIden::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        tracing::info!(transaction_id = id, %status, "transaction status updated");

        self.find(id).await?.or_not_found()
    }
}

/// Checkout workflow: turns the caller's active cart into a pending
/// transaction once the payment service has opened a session.
pub struct Service<P> {
    pool: SqlitePool,
    transactions: Repository,
    carts: cart::Repository,
    addresses: address::Repository,
    couriers: courier::Repository,
    gateway: Arc<P>,
}

impl<P> Clone for Service<P> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            transactions: self.transactions.clone(),
            carts: self.carts.clone(),
            addresses: self.addresses.clone(),
            couriers: self.couriers.clone(),
            gateway: self.gateway.clone(),
        }
    }
}

impl<P: PaymentGateway> Service<P> {
    pub fn new(pool: SqlitePool, gateway: P) -> Self {
        Self {
            transactions: Repository(pool.clone()),
            carts: cart::Repository(pool.clone()),
            addresses: address::Repository(pool.clone()),
            couriers: courier::Repository(pool.clone()),
            gateway: Arc::new(gateway),
            pool,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.transactions
    }

    /// Nothing is written unless the payment service accepted the order; a
    /// refused payment leaves the cart active.
    pub async fn checkout(
        &self,
        user_id: i64,
        authorization: &str,
        input: CheckoutInput,
    ) -> Result<Checkout> {
        input.validate()?;

        self.couriers.get_by_id(input.courier_id).await?;
        self.addresses.get_owned(user_id, input.address_id).await?;
        let cart = self.carts.get_active(user_id).await?;

        let payment = self
            .gateway
            .create_payment(authorization, &input.payment_request())
            .await?;

        let mut tx = self.pool.begin().await?;
        if let Err(err) = cart::mark_used(&mut tx, cart.id).await {
            tracing::warn!(
                user_id,
                cart_id = cart.id,
                payment_id = payment.id,
                "payment opened for a cart consumed by another checkout"
            );

            return Err(err);
        }

        let id = insert(
            &mut tx,
            NewTransaction {
                user_id,
                cart_id: cart.id,
                payment_id: payment.id,
                courier_id: input.courier_id,
                address_id: input.address_id,
                amount: input.amount,
            },
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            user_id,
            transaction_id = id,
            cart_id = cart.id,
            payment_id = payment.id,
            "checkout completed"
        );

        let transaction = self.transactions.find(id).await?.or_not_found()?;

        Ok(Checkout {
            transaction,
            payment_url: payment.url,
            reference_id: payment.reference_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CheckoutInput {
        CheckoutInput {
            courier_id: 1,
            address_id: 1,
            amount: 50000.0,
            item_names: vec!["Nasi Goreng".to_owned(), "Es Teh".to_owned()],
            item_qtys: vec![1, 2],
            item_prices: vec![40000.0, 5000.0],
        }
    }

    #[test]
    fn checkout_input_valid() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn item_arrays_must_line_up() {
        let mut mismatched = input();
        mismatched.item_qtys.pop();
        assert!(mismatched.validate().is_err());

        let empty = CheckoutInput {
            item_names: vec![],
            item_qtys: vec![],
            item_prices: vec![],
            ..input()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn item_values_must_be_positive() {
        let mut zero_qty = input();
        zero_qty.item_qtys[0] = 0;
        assert!(zero_qty.validate().is_err());

        let mut free = input();
        free.item_prices[1] = 0.0;
        assert!(free.validate().is_err());

        let no_amount = CheckoutInput {
            amount: 0.0,
            ..input()
        };
        assert!(no_amount.validate().unwrap_err().field_errors().contains_key("amount"));
    }

    #[test]
    fn ongoing_statuses() {
        assert!(TransactionStatus::Pending.is_ongoing());
        assert!(TransactionStatus::Processing.is_ongoing());
        assert!(!TransactionStatus::Completed.is_ongoing());
        assert!(!TransactionStatus::Cancelled.is_ongoing());
        assert_eq!(TransactionStatus::Cancelled.as_ref(), "cancelled");
    }
}
