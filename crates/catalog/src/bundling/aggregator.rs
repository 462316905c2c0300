use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use mealkit_shared::{Args, Error, Page, Result};
use tokio::task::{JoinError, JoinSet};

use super::{Bundling, BundlingMenu, BundlingReader, MenuReader};
use crate::menu::Menu;

enum Resolved {
    Menu(i64, Menu),
    Bundling(i64, Bundling),
}

/// A row that references a missing menu or bundling is broken data, not a
/// bad request.
fn unresolved(kind: &str, id: i64, err: Error) -> Error {
    match err {
        Error::Internal(_) | Error::Cancelled => err,
        other => Error::Internal(anyhow::anyhow!("{kind} {id} could not be resolved: {other}")),
    }
}

fn join_error(err: JoinError) -> Error {
    if err.is_cancelled() {
        Error::Cancelled
    } else {
        Error::Internal(anyhow::anyhow!("bundling lookup task failed: {err}"))
    }
}

/// Bundling service. Besides plain lookups it hydrates bundling menu rows by
/// resolving every distinct foreign key concurrently.
pub struct Service<B, M> {
    bundlings: Arc<B>,
    menus: Arc<M>,
}

impl<B, M> Clone for Service<B, M> {
    fn clone(&self) -> Self {
        Self {
            bundlings: self.bundlings.clone(),
            menus: self.menus.clone(),
        }
    }
}

impl<B: BundlingReader, M: MenuReader> Service<B, M> {
    pub fn new(bundlings: B, menus: M) -> Self {
        Self {
            bundlings: Arc::new(bundlings),
            menus: Arc::new(menus),
        }
    }

    pub async fn fetch(&self, args: Args) -> Result<Page<Bundling>> {
        self.bundlings.fetch(args).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Bundling> {
        self.bundlings.get_by_id(id).await
    }

    /// Returns every row of `bundling_id` in day order with `bundling` and
    /// `menu` fully populated. One lookup runs per distinct id; the first
    /// failure aborts the others and fails the whole call.
    ///
    /// Dropping the returned future aborts all in-flight lookups.
    pub async fn fetch_bundling_menus(&self, bundling_id: i64) -> Result<Vec<BundlingMenu>> {
        let mut rows = self.bundlings.fetch_bundling_menus(bundling_id).await?;
        if rows.is_empty() {
            return Ok(rows);
        }

        let menu_ids = rows.iter().map(|row| row.menu.id).collect::<BTreeSet<_>>();
        let bundling_ids = rows
            .iter()
            .map(|row| row.bundling.id)
            .collect::<BTreeSet<_>>();

        tracing::debug!(
            bundling_id,
            rows = rows.len(),
            menus = menu_ids.len(),
            bundlings = bundling_ids.len(),
            "resolving bundling menu references"
        );

        let mut tasks = JoinSet::new();

        for id in menu_ids {
            let menus = self.menus.clone();
            tasks.spawn(async move {
                let menu = menus
                    .get_by_id(id)
                    .await
                    .map_err(|err| unresolved("menu", id, err))?;
                Ok::<_, Error>(Resolved::Menu(id, menu))
            });
        }

        for id in bundling_ids {
            let bundlings = self.bundlings.clone();
            tasks.spawn(async move {
                let bundling = bundlings
                    .get_by_id(id)
                    .await
                    .map_err(|err| unresolved("bundling", id, err))?;
                Ok::<_, Error>(Resolved::Bundling(id, bundling))
            });
        }

        let mut menus = HashMap::new();
        let mut bundlings = HashMap::new();

        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(join_error)?? {
                Resolved::Menu(id, menu) => {
                    menus.insert(id, menu);
                }
                Resolved::Bundling(id, bundling) => {
                    bundlings.insert(id, bundling);
                }
            }
        }

        for row in rows.iter_mut() {
            if let Some(menu) = menus.get(&row.menu.id) {
                row.menu = menu.clone();
            }
            if let Some(bundling) = bundlings.get(&row.bundling.id) {
                row.bundling = bundling.clone();
            }
        }

        Ok(rows)
    }

    /// Same as [`Self::fetch_bundling_menus`] but only for monthly bundlings.
    pub async fn fetch_monthly_menus(&self, bundling_id: i64) -> Result<Vec<BundlingMenu>> {
        let bundling = self.bundlings.get_by_id(bundling_id).await?;
        if !bundling.is_monthly() {
            return Err(Error::ValidationFailed(
                "bundling type must be 'monthly'".to_owned(),
            ));
        }

        self.fetch_bundling_menus(bundling_id).await
    }
}
