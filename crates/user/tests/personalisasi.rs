use mealkit_user::personalisasi::{PreferencesInput, Repository};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn defaults_when_nothing_stored() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repo = Repository(pool);

    let prefs = repo.get(7).await?;
    assert_eq!(prefs.user_id, 7);
    assert_eq!(prefs.id, 0);
    assert!(!prefs.diabetes && !prefs.vegetarian);

    Ok(())
}

#[tokio::test]
async fn upsert_keeps_one_row_per_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repo = Repository(pool.clone());

    let first = repo
        .upsert(
            7,
            PreferencesInput {
                diabetes: true,
                ..Default::default()
            },
        )
        .await?;
    assert!(first.diabetes);

    let second = repo
        .upsert(
            7,
            PreferencesInput {
                vegetarian: true,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(second.id, first.id);
    assert!(!second.diabetes);
    assert!(second.vegetarian);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM personalisasi")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
