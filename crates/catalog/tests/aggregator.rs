use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use mealkit_catalog::{
    bundling::{Bundling, BundlingMenu, BundlingReader, BundlingType, MenuReader, Service},
    menu::Menu,
};
use mealkit_shared::{Args, Error, Page, Result};

#[derive(Default)]
struct FakeMenus {
    calls: Arc<AtomicUsize>,
    finished: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<i64>>>,
    failing: Option<i64>,
    delay: Option<Duration>,
}

#[async_trait]
impl MenuReader for FakeMenus {
    async fn get_by_id(&self, id: i64) -> Result<Menu> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(id);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);

        if self.failing == Some(id) {
            return Err(Error::NotFound);
        }

        Ok(Menu {
            id,
            title: format!("menu {id}"),
            price: 10.0 * id as f64,
            ..Default::default()
        })
    }
}

struct FakeBundlings {
    calls: Arc<AtomicUsize>,
    rows: Vec<BundlingMenu>,
    types: HashMap<i64, BundlingType>,
}

impl FakeBundlings {
    fn new(rows: Vec<(i64, i64, i64)>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, (bundling_id, day_number, menu_id))| BundlingMenu {
                id: idx as i64 + 1,
                day_number,
                bundling: Bundling::placeholder(bundling_id),
                menu: Menu::placeholder(menu_id),
                ..Default::default()
            })
            .collect();

        Self {
            calls: Arc::default(),
            rows,
            types: HashMap::new(),
        }
    }
}

#[async_trait]
impl BundlingReader for FakeBundlings {
    async fn fetch(&self, args: Args) -> Result<Page<Bundling>> {
        Ok(Page::new(vec![], &args, |b: &Bundling| b.id))
    }

    async fn get_by_id(&self, id: i64) -> Result<Bundling> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(Bundling {
            id,
            name: format!("bundling {id}"),
            bundling_type: self.types.get(&id).copied().unwrap_or_default(),
            ..Default::default()
        })
    }

    async fn fetch_bundling_menus(&self, bundling_id: i64) -> Result<Vec<BundlingMenu>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.bundling.id == bundling_id)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn one_lookup_per_distinct_id() -> anyhow::Result<()> {
    let menus = FakeMenus::default();
    let menu_calls = menus.calls.clone();
    let requested = menus.requested.clone();
    let bundlings = FakeBundlings::new(vec![(10, 2, 5), (10, 1, 5), (10, 1, 7)]);
    let bundling_calls = bundlings.calls.clone();

    let service = Service::new(bundlings, menus);
    let rows = service.fetch_bundling_menus(10).await?;

    assert_eq!(menu_calls.load(Ordering::SeqCst), 2);
    assert_eq!(bundling_calls.load(Ordering::SeqCst), 1);

    let mut requested = requested.lock().unwrap().clone();
    requested.sort();
    assert_eq!(requested, vec![5, 7]);

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(|r| (r.id, r.day_number, r.menu.id)).collect::<Vec<_>>(),
        vec![(1, 2, 5), (2, 1, 5), (3, 1, 7)]
    );
    assert!(rows.iter().all(|r| r.bundling.name == "bundling 10"));
    assert_eq!(rows[0].menu.title, "menu 5");
    assert_eq!(rows[2].menu.title, "menu 7");

    Ok(())
}

#[tokio::test]
async fn many_rows_few_ids() -> anyhow::Result<()> {
    let rows = (1..=31).map(|day| (3, day, day % 4 + 1)).collect::<Vec<_>>();
    let menus = FakeMenus::default();
    let menu_calls = menus.calls.clone();
    let bundlings = FakeBundlings::new(rows);
    let bundling_calls = bundlings.calls.clone();

    let hydrated = Service::new(bundlings, menus).fetch_bundling_menus(3).await?;

    assert_eq!(hydrated.len(), 31);
    assert_eq!(menu_calls.load(Ordering::SeqCst), 4);
    assert_eq!(bundling_calls.load(Ordering::SeqCst), 1);
    for row in hydrated {
        assert_eq!(row.menu.title, format!("menu {}", row.menu.id));
        assert_eq!(row.menu.id, row.day_number % 4 + 1);
    }

    Ok(())
}

#[tokio::test]
async fn empty_bundling_makes_no_lookups() -> anyhow::Result<()> {
    let menus = FakeMenus::default();
    let menu_calls = menus.calls.clone();
    let bundlings = FakeBundlings::new(vec![(1, 1, 1)]);
    let bundling_calls = bundlings.calls.clone();

    let rows = Service::new(bundlings, menus).fetch_bundling_menus(99).await?;

    assert!(rows.is_empty());
    assert_eq!(menu_calls.load(Ordering::SeqCst), 0);
    assert_eq!(bundling_calls.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn single_failure_fails_everything() -> anyhow::Result<()> {
    let menus = FakeMenus {
        failing: Some(7),
        ..Default::default()
    };
    let bundlings = FakeBundlings::new(vec![(10, 2, 5), (10, 1, 5), (10, 1, 7)]);

    let result = Service::new(bundlings, menus).fetch_bundling_menus(10).await;

    assert!(matches!(result, Err(Error::Internal(_))));

    Ok(())
}

#[tokio::test]
async fn dropping_the_call_aborts_lookups() -> anyhow::Result<()> {
    let menus = FakeMenus {
        delay: Some(Duration::from_millis(200)),
        ..Default::default()
    };
    let started = menus.calls.clone();
    let finished = menus.finished.clone();
    let bundlings = FakeBundlings::new(vec![(10, 1, 5), (10, 2, 6)]);
    let service = Service::new(bundlings, menus);

    let result = tokio::time::timeout(
        Duration::from_millis(50),
        service.fetch_bundling_menus(10),
    )
    .await;
    assert!(result.is_err());
    assert_eq!(started.load(Ordering::SeqCst), 2);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(finished.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn weekly_view_requires_monthly_bundling() -> anyhow::Result<()> {
    let mut bundlings = FakeBundlings::new(vec![(1, 1, 1), (2, 1, 1), (2, 9, 2)]);
    bundlings.types.insert(2, BundlingType::Monthly);
    let service = Service::new(bundlings, FakeMenus::default());

    let daily = service.fetch_monthly_menus(1).await;
    assert!(matches!(daily, Err(Error::ValidationFailed(_))));

    let monthly = service.fetch_monthly_menus(2).await?;
    assert_eq!(monthly.len(), 2);
    assert!(monthly.iter().all(|row| row.bundling.is_monthly()));

    Ok(())
}
