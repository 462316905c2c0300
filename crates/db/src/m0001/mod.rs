/// Implements `sqlx_migrator::Operation` for a unit struct from a pair of
/// statement builders, `up` runs the first and `down` the second.
macro_rules! operation {
    ($name:ident, $up:ident, $down:ident) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

mod address;
mod banner;
mod bundling;
mod bundling_menu;
mod cart;
mod cart_item;
mod category;
mod courier;
mod food_nutrition;
mod menu;
mod personalisasi;
mod transaction;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealkit",
    "m0001",
    vec_box![],
    vec_box![
        menu::CreateTable,
        category::CreateTable,
        category::CreateMenuTable,
        bundling::CreateTable,
        bundling_menu::CreateTable,
        bundling_menu::CreateIdx1,
        banner::CreateTable,
        courier::CreateTable,
        food_nutrition::CreateTable,
        food_nutrition::CreateIdx1,
        address::CreateTable,
        address::CreateIdx1,
        personalisasi::CreateTable,
        personalisasi::CreateUk1,
        cart::CreateTable,
        cart::CreateIdx1,
        cart_item::CreateTable,
        cart_item::CreateIdx1,
        transaction::CreateTable,
        transaction::CreateIdx1
    ]
);
