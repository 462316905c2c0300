#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use httpmock::MockServer;
use mealkit::AppState;
use mealkit_order::HttpPaymentGateway;
use serde_json::Value;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    pub payment: MockServer,
    _dir: TempDir,
}

pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = mealkit::db::create_pool(&url, 2).await?;
    mealkit::db::migrate(&pool).await?;

    let payment = MockServer::start_async().await;
    let gateway = HttpPaymentGateway::new(payment.url("/payment"), Duration::from_secs(5))?;
    let state = AppState::new(pool.clone(), SECRET, gateway);

    Ok(TestApp {
        app: mealkit::create_app(state, Duration::from_secs(10)),
        pool,
        payment,
        _dir: dir,
    })
}

pub fn token(user_id: i64) -> String {
    mealkit::auth::generate_token(SECRET, user_id, 3600).unwrap()
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, json))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn create_menus(&self, titles: &[&str]) -> anyhow::Result<Vec<i64>> {
        let repo = mealkit_catalog::menu::Repository(self.pool.clone());
        let mut ids = vec![];
        for title in titles {
            let id = repo
                .create(mealkit_catalog::menu::CreateInput {
                    title: (*title).to_owned(),
                    price: 25000.0,
                    ..Default::default()
                })
                .await?;
            ids.push(id);
        }

        Ok(ids)
    }
}
