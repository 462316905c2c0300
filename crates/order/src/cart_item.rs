use mealkit_db::table::CartItem as CartItemIden;
use mealkit_shared::Result;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor, prelude::FromRow};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub menu_id: Option<i64>,
    pub bundling_id: Option<i64>,
    pub image_url: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

fn has_reference(input: &ItemInput) -> std::result::Result<(), ValidationError> {
    if input.menu_id.is_none() && input.bundling_id.is_none() {
        return Err(ValidationError::new("menu_or_bundling_required"));
    }

    Ok(())
}

/// One item added to the caller's active cart. `price` is per unit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "has_reference"))]
pub struct ItemInput {
    pub menu_id: Option<i64>,
    pub bundling_id: Option<i64>,
    #[serde(default)]
    pub image_url: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuantityInput {
    #[validate(range(min = 1))]
    pub quantity: i64,
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            CartItemIden::Id,
            CartItemIden::CartId,
            CartItemIden::MenuId,
            CartItemIden::BundlingId,
            CartItemIden::ImageUrl,
            CartItemIden::Name,
            CartItemIden::Quantity,
            CartItemIden::Price,
            CartItemIden::CreatedAt,
            CartItemIden::UpdatedAt,
        ])
        .from(CartItemIden::Table)
        .to_owned()
}

pub async fn list<'e>(executor: impl SqliteExecutor<'e>, cart_id: i64) -> Result<Vec<CartItem>> {
    let statement = select()
        .and_where(Expr::col(CartItemIden::CartId).eq(cart_id))
        .order_by(CartItemIden::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CartItem, _>(&sql, values)
        .fetch_all(executor)
        .await?)
}

pub async fn find<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<Option<CartItem>> {
    let statement = select()
        .and_where(Expr::col(CartItemIden::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CartItem, _>(&sql, values)
        .fetch_optional(executor)
        .await?)
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    cart_id: i64,
    input: ItemInput,
) -> Result<i64> {
    let now = mealkit_shared::now();
    let statement = Query::insert()
        .into_table(CartItemIden::Table)
        .columns([
            CartItemIden::CartId,
            CartItemIden::MenuId,
            CartItemIden::BundlingId,
            CartItemIden::ImageUrl,
            CartItemIden::Name,
            CartItemIden::Quantity,
            CartItemIden::Price,
            CartItemIden::CreatedAt,
            CartItemIden::UpdatedAt,
        ])
        .values_panic([
            cart_id.into(),
            input.menu_id.into(),
            input.bundling_id.into(),
            input.image_url.into(),
            input.name.into(),
            input.quantity.into(),
            input.price.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn set_quantity(conn: &mut SqliteConnection, id: i64, quantity: i64) -> Result<()> {
    let statement = Query::update()
        .table(CartItemIden::Table)
        .value(CartItemIden::Quantity, quantity)
        .value(CartItemIden::UpdatedAt, mealkit_shared::now())
        .and_where(Expr::col(CartItemIden::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    let statement = Query::delete()
        .from_table(CartItemIden::Table)
        .and_where(Expr::col(CartItemIden::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ItemInput {
        ItemInput {
            menu_id: Some(1),
            name: "Nasi Goreng".to_owned(),
            quantity: 2,
            price: 25000.0,
            ..Default::default()
        }
    }

    #[test]
    fn valid_item() {
        assert!(item().validate().is_ok());
        assert!(
            ItemInput {
                menu_id: None,
                bundling_id: Some(3),
                ..item()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn reference_required() {
        let errors = ItemInput {
            menu_id: None,
            ..item()
        }
        .validate()
        .unwrap_err();

        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn quantity_and_price_must_be_positive() {
        let errors = ItemInput {
            quantity: 0,
            price: 0.0,
            name: String::new(),
            ..item()
        }
        .validate()
        .unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let item = CartItem {
            id: 1,
            cart_id: 1,
            menu_id: Some(1),
            bundling_id: None,
            image_url: String::new(),
            name: "Soto".to_owned(),
            quantity: 3,
            price: 12500.0,
            created_at: 0,
            updated_at: 0,
        };

        assert_eq!(item.subtotal(), 37500.0);
    }
}
