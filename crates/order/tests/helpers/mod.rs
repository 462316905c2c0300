use std::{path::PathBuf, str::FromStr};

use mealkit_order::cart_item::ItemInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealkit_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn item(name: &str, quantity: i64, price: f64) -> ItemInput {
    ItemInput {
        menu_id: Some(1),
        name: name.to_owned(),
        quantity,
        price,
        ..Default::default()
    }
}
