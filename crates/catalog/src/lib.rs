pub mod banner;
pub mod bundling;
pub mod category;
pub mod courier;
pub mod menu;
pub mod nutrition;

use sqlx::SqlitePool;

/// Catalog repositories sharing one pool.
#[derive(Clone)]
pub struct Catalog {
    pub banners: banner::Repository,
    pub bundlings: bundling::Service<bundling::Repository, menu::Repository>,
    pub categories: category::Repository,
    pub couriers: courier::Repository,
    pub menus: menu::Repository,
    pub nutrition: nutrition::Repository,
}

impl Catalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            banners: banner::Repository(pool.clone()),
            bundlings: bundling::Service::new(
                bundling::Repository(pool.clone()),
                menu::Repository(pool.clone()),
            ),
            categories: category::Repository(pool.clone()),
            couriers: courier::Repository(pool.clone()),
            menus: menu::Repository(pool.clone()),
            nutrition: nutrition::Repository(pool),
        }
    }
}
