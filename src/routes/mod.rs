use axum::{
    Router,
    routing::{delete, get},
};
use mealkit_catalog::Catalog;
use mealkit_order::HttpPaymentGateway;
use sqlx::SqlitePool;

mod address;
mod bundling;
mod cart;
mod catalog;
mod extract;
mod health;
mod menu;
mod personalisasi;
mod transaction;

pub use extract::*;

#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: String,
    pub pool: SqlitePool,
    pub catalog: Catalog,
    pub addresses: mealkit_user::address::Repository,
    pub personalisasi: mealkit_user::personalisasi::Repository,
    pub carts: mealkit_order::cart::Repository,
    pub transactions: mealkit_order::transaction::Service<HttpPaymentGateway>,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_secret: impl Into<String>, gateway: HttpPaymentGateway) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            catalog: Catalog::new(pool.clone()),
            addresses: mealkit_user::address::Repository(pool.clone()),
            personalisasi: mealkit_user::personalisasi::Repository(pool.clone()),
            carts: mealkit_order::cart::Repository(pool.clone()),
            transactions: mealkit_order::transaction::Service::new(pool.clone(), gateway),
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/menu", get(menu::list))
        .route("/menu/recommendation", get(menu::recommendation))
        .route("/menu/category/{category_id}", get(menu::by_category))
        .route("/menu/{id}", get(menu::detail))
        .route("/bundling", get(bundling::list))
        .route("/bundling/{id}", get(bundling::detail))
        .route("/bundling/{id}/menu", get(bundling::menus))
        .route("/bundling/{id}/menu/grouped", get(bundling::grouped))
        .route("/banner", get(catalog::banners))
        .route("/banner/{id}", get(catalog::banner))
        .route("/category", get(catalog::categories))
        .route("/category/{id}", get(catalog::category))
        .route("/courier", get(catalog::couriers))
        .route("/courier/{id}", get(catalog::courier))
        .route("/nutrition", get(catalog::nutrition))
        .route(
            "/address",
            get(address::list)
                .post(address::create)
                .put(address::update),
        )
        .route("/address/{id}", delete(address::delete))
        .route(
            "/personalisasi",
            get(personalisasi::get).post(personalisasi::upsert),
        )
        .route("/cart", get(cart::active).post(cart::add_item))
        .route("/cart/home", get(cart::summary))
        .route("/cart/item/{id}", delete(cart::delete_item))
        .route(
            "/cart/{id}",
            get(cart::detail)
                .post(cart::update_quantity)
                .delete(cart::delete),
        )
        .route(
            "/transaction",
            get(transaction::list).post(transaction::checkout),
        )
        .route("/transaction/ongoing", get(transaction::ongoing))
        .route("/transaction/{id}", get(transaction::detail))
        .route("/history", get(transaction::list))
        .route("/history/{id}", get(transaction::detail))
        .with_state(app_state)
}
