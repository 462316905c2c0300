use std::{path::PathBuf, str::FromStr};

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
pub async fn create_menus(
    pool: &SqlitePool,
    titles: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<i64>> {
    let repo = mealkit_catalog::menu::Repository(pool.clone());
    let mut ids = vec![];
    for title in titles {
        let id = repo
            .create(mealkit_catalog::menu::CreateInput {
                title: title.into(),
                price: 25000.0,
                ..Default::default()
            })
            .await?;
        ids.push(id);
    }

    Ok(ids)
}
