use mealkit::config::Config;
use mealkit_catalog::{
    Catalog, banner,
    bundling::{self, BundlingType},
    category, courier, menu, nutrition,
};
use mealkit_shared::Args;
use serde_json::json;

/// Demo catalog. Skipped when menus already exist.
#[tracing::instrument(skip(config))]
pub async fn seed(config: Config) -> anyhow::Result<()> {
    let pool = mealkit::db::create_pool(&config.database.url, 1).await?;
    mealkit::db::migrate(&pool).await?;
    let catalog = Catalog::new(pool.clone());

    if !catalog.menus.fetch(Args::default(), None).await?.items.is_empty() {
        tracing::info!("Catalog already has menus, nothing to seed");
        pool.close().await;

        return Ok(());
    }

    let menus = [
        ("Nasi Goreng Ayam", 28000.0, json!({"gluten_free": false, "high_protein": 24, "vegetarian": false})),
        ("Gado-gado", 22000.0, json!({"gluten_free": true, "high_protein": 12, "vegetarian": true})),
        ("Sate Ayam", 30000.0, json!({"gluten_free": true, "high_protein": 31, "vegetarian": false})),
        ("Sayur Asem", 18000.0, json!({"gluten_free": true, "high_protein": 4, "vegetarian": true})),
        ("Pepes Ikan", 32000.0, json!({"gluten_free": true, "high_protein": 27, "vegetarian": false})),
    ];

    let mut menu_ids = vec![];
    for (title, price, features) in menus {
        let id = catalog
            .menus
            .create(menu::CreateInput {
                title: title.to_owned(),
                description: format!("{title} from the mealkit kitchen"),
                price,
                features,
                nutrition: json!({"calories": 450}),
                ..Default::default()
            })
            .await?;
        menu_ids.push(id);
    }

    let healthy = catalog
        .categories
        .create(category::CreateInput {
            name: "Healthy".to_owned(),
            image_url: String::new(),
        })
        .await?;
    for menu_id in menu_ids.iter().filter(|id| *id % 2 == 0) {
        catalog.categories.attach_menu(healthy, *menu_id).await?;
    }

    let bundlings = bundling::Repository(pool.clone());
    let daily = bundlings
        .create(bundling::CreateInput {
            name: "Paket Harian".to_owned(),
            bundling_type: BundlingType::Daily,
            price: 45000.0,
            image_url: String::new(),
        })
        .await?;
    let monthly = bundlings
        .create(bundling::CreateInput {
            name: "Paket Bulanan".to_owned(),
            bundling_type: BundlingType::Monthly,
            price: 1200000.0,
            image_url: String::new(),
        })
        .await?;

    for (i, menu_id) in menu_ids.iter().take(2).enumerate() {
        bundlings
            .add_menu(bundling::AddMenuInput {
                bundling_id: daily,
                menu_id: *menu_id,
                day_number: 1,
                meal_description: if i == 0 { "Lunch" } else { "Dinner" }.to_owned(),
            })
            .await?;
    }

    for day_number in 1..=30 {
        let menu_id = menu_ids[(day_number as usize - 1) % menu_ids.len()];
        bundlings
            .add_menu(bundling::AddMenuInput {
                bundling_id: monthly,
                menu_id,
                day_number,
                meal_description: "Lunch".to_owned(),
            })
            .await?;
    }

    catalog
        .banners
        .create(banner::CreateInput {
            title: "Free delivery this week".to_owned(),
            image_url: "https://cdn.mealkit.local/banner/delivery.png".to_owned(),
        })
        .await?;

    for (name, price) in [("JNE", 10000.0), ("GoSend", 15000.0)] {
        catalog
            .couriers
            .create(courier::CreateInput {
                name: name.to_owned(),
                logo: String::new(),
                price,
            })
            .await?;
    }

    catalog
        .nutrition
        .create(nutrition::CreateInput {
            food_name: "nasi goreng".to_owned(),
            calories: 625,
            protein: 24,
            fat: 21,
            carbohydrates: 86,
            sugar: 6,
        })
        .await?;

    tracing::info!(menus = menu_ids.len(), daily, monthly, "Demo catalog seeded");

    pool.close().await;

    Ok(())
}
