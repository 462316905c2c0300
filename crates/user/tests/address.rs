use mealkit_shared::Error;
use mealkit_user::address::{AddressInput, Repository, UpdateInput};
use temp_dir::TempDir;

mod helpers;

fn home() -> AddressInput {
    AddressInput {
        label: "Home".to_owned(),
        address: "Jl. Merdeka No. 1".to_owned(),
        name: "Budi".to_owned(),
        notes: "Green gate".to_owned(),
        phone: "081234567890".to_owned(),
    }
}

#[tokio::test]
async fn create_and_list_per_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repo = Repository(pool);

    let created = repo.create(1, home()).await?;
    repo.create(2, home()).await?;

    assert_eq!(created.user_id, 1);
    assert_eq!(created.label, "Home");

    let addresses = repo.list(1).await?;
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0], created);

    Ok(())
}

#[tokio::test]
async fn validation_rejects_missing_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repo = Repository(pool);

    let result = repo
        .create(
            1,
            AddressInput {
                name: String::new(),
                phone: "12".to_owned(),
                ..home()
            },
        )
        .await;

    let Err(Error::Validate(errors)) = result else {
        panic!("expected validation error");
    };
    let fields = errors.field_errors();
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("phone"));

    Ok(())
}

#[tokio::test]
async fn update_and_delete_require_ownership() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repo = Repository(pool);
    let address = repo.create(1, home()).await?;

    let stolen = repo
        .update(
            2,
            UpdateInput {
                id: address.id,
                fields: home(),
            },
        )
        .await;
    assert!(matches!(stolen, Err(Error::Forbidden)));
    assert!(matches!(
        repo.delete(2, address.id).await,
        Err(Error::Forbidden)
    ));

    let updated = repo
        .update(
            1,
            UpdateInput {
                id: address.id,
                fields: AddressInput {
                    label: "Office".to_owned(),
                    ..home()
                },
            },
        )
        .await?;
    assert_eq!(updated.label, "Office");

    repo.delete(1, address.id).await?;
    assert!(repo.list(1).await?.is_empty());
    assert!(matches!(
        repo.delete(1, address.id).await,
        Err(Error::NotFound)
    ));

    Ok(())
}
