use axum::http::StatusCode;
use mealkit_catalog::bundling::{self, AddMenuInput, BundlingType};

mod helpers;

async fn create_bundling(
    app: &helpers::TestApp,
    bundling_type: BundlingType,
    schedule: &[(i64, i64)],
) -> anyhow::Result<i64> {
    let repo = bundling::Repository(app.pool.clone());
    let id = repo
        .create(bundling::CreateInput {
            name: format!("{bundling_type} pack"),
            bundling_type,
            price: 150000.0,
            image_url: String::new(),
        })
        .await?;

    for (day_number, menu_id) in schedule {
        repo.add_menu(AddMenuInput {
            bundling_id: id,
            menu_id: *menu_id,
            day_number: *day_number,
            meal_description: "Lunch".to_owned(),
        })
        .await?;
    }

    Ok(id)
}

#[tokio::test]
async fn health_and_ready() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let (status, body) = app.get("/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    Ok(())
}

#[tokio::test]
async fn menu_pages_follow_next_cursor() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    app.create_menus(&["Nasi Goreng", "Soto Ayam", "Rendang"])
        .await?;

    let (status, body) = app.get("/menu?num=2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully Get Menu!");
    assert_eq!(body["data"]["menus"].as_array().map(Vec::len), Some(2));

    let cursor = body["data"]["nextCursor"].as_str().unwrap_or_default().to_owned();
    assert!(!cursor.is_empty());

    let (status, body) = app
        .get(&format!("/menu?num=2&cursor={cursor}"), None)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["menus"][0]["title"], "Rendang");
    assert_eq!(body["data"]["nextCursor"], "");

    Ok(())
}

#[tokio::test]
async fn menu_search_filters_titles() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    app.create_menus(&["Nasi Goreng", "Soto Ayam", "Nasi Uduk"])
        .await?;

    let (_, body) = app.get("/menu?search=Nasi", None).await?;
    let titles = body["data"]["menus"]
        .as_array()
        .map(|menus| menus.iter().map(|m| m["title"].clone()).collect::<Vec<_>>())
        .unwrap_or_default();

    assert_eq!(titles, vec!["Nasi Goreng", "Nasi Uduk"]);

    Ok(())
}

#[tokio::test]
async fn bad_params_are_rejected() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let (status, body) = app.get("/menu?num=0", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = app.get("/menu?num=abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/menu?cursor=%25%25%25", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/menu/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    Ok(())
}

#[tokio::test]
async fn unknown_menu_is_not_found() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let (status, body) = app.get("/menu/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], serde_json::Value::Null);

    Ok(())
}

#[tokio::test]
async fn bundling_menu_grouped_by_day() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let menus = app.create_menus(&["Nasi Goreng", "Soto Ayam"]).await?;
    let id = create_bundling(
        &app,
        BundlingType::Daily,
        &[(2, menus[0]), (1, menus[1]), (1, menus[0])],
    )
    .await?;

    let (status, body) = app.get(&format!("/bundling/{id}/menu"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let days = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["day"], "Day 1");
    assert_eq!(days[0]["menu"].as_array().map(Vec::len), Some(2));
    assert_eq!(days[0]["menu"][0]["menu"]["title"], "Soto Ayam");
    assert_eq!(days[0]["menu"][0]["bundling"]["bundling_type"], "daily");
    assert_eq!(days[1]["day"], "Day 2");

    Ok(())
}

#[tokio::test]
async fn monthly_bundling_grouped_by_week() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let menus = app.create_menus(&["Nasi Goreng"]).await?;
    let schedule = (1..=10).map(|day| (day, menus[0])).collect::<Vec<_>>();
    let id = create_bundling(&app, BundlingType::Monthly, &schedule).await?;

    let (status, body) = app
        .get(&format!("/bundling/{id}/menu/grouped"), None)
        .await?;
    assert_eq!(status, StatusCode::OK);

    let weeks = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0]["week"], "Week 1");
    assert_eq!(weeks[0]["days"].as_array().map(Vec::len), Some(7));
    assert_eq!(weeks[1]["week"], "Week 2");
    assert_eq!(weeks[1]["days"][0]["day"], "Day 8");

    Ok(())
}

#[tokio::test]
async fn grouped_route_requires_monthly_bundling() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let menus = app.create_menus(&["Nasi Goreng"]).await?;
    let id = create_bundling(&app, BundlingType::Daily, &[(1, menus[0])]).await?;

    let (status, body) = app
        .get(&format!("/bundling/{id}/menu/grouped"), None)
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = app.get("/bundling/999/menu/grouped", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn empty_bundling_has_no_days() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let id = create_bundling(&app, BundlingType::Daily, &[]).await?;

    let (status, body) = app.get(&format!("/bundling/{id}/menu"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    Ok(())
}
