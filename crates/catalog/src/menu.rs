use mealkit_db::table::{CategoryMenu, Menu as MenuIden};
use mealkit_shared::{Args, OrNotFound, Page, Result};
use sea_query::{Expr, ExprTrait, LikeExpr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

/// Minimum `high_protein` grams for a menu to count as high protein.
pub const HIGH_PROTEIN_GRAMS: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Menu {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[sqlx(json)]
    pub nutrition: Value,
    #[sqlx(json)]
    pub features: Value,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Menu {
    /// A menu carrying only its id, as loaded from a foreign key.
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// Dietary needs derived from a user's preferences. A menu is recommended
/// when its `features` satisfy at least one active need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Needs {
    pub gluten_free: bool,
    pub high_protein: bool,
    pub vegetarian: bool,
}

impl Needs {
    pub fn is_empty(&self) -> bool {
        !(self.gluten_free || self.high_protein || self.vegetarian)
    }

    pub fn matches(&self, features: &Value) -> bool {
        let flag = |key: &str| features.get(key).and_then(Value::as_bool) == Some(true);

        (self.gluten_free && flag("gluten_free"))
            || (self.high_protein
                && features
                    .get("high_protein")
                    .and_then(Value::as_f64)
                    .is_some_and(|grams| grams >= HIGH_PROTEIN_GRAMS))
            || (self.vegetarian && flag("vegetarian"))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub nutrition: Value,
    #[serde(default)]
    pub features: Value,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

fn select() -> SelectStatement {
    Query::select()
        .columns([
            (MenuIden::Table, MenuIden::Id),
            (MenuIden::Table, MenuIden::Title),
            (MenuIden::Table, MenuIden::Description),
            (MenuIden::Table, MenuIden::Price),
            (MenuIden::Table, MenuIden::ImageUrl),
            (MenuIden::Table, MenuIden::Nutrition),
            (MenuIden::Table, MenuIden::Features),
            (MenuIden::Table, MenuIden::CreatedAt),
            (MenuIden::Table, MenuIden::UpdatedAt),
        ])
        .from(MenuIden::Table)
        .to_owned()
}

/// `LIKE` pattern matching titles containing `search` literally.
fn title_contains(search: &str) -> LikeExpr {
    let mut pattern = String::from("%");
    for c in search.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn json_text(value: &Value) -> String {
    match value {
        Value::Null => "{}".to_owned(),
        other => other.to_string(),
    }
}

impl Repository {
    pub async fn fetch(&self, args: Args, search: Option<&str>) -> Result<Page<Menu>> {
        let mut statement = select()
            .and_where(Expr::col((MenuIden::Table, MenuIden::Id)).gt(args.after))
            .order_by((MenuIden::Table, MenuIden::Id), Order::Asc)
            .limit(args.limit)
            .to_owned();

        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            statement.and_where(
                Expr::col((MenuIden::Table, MenuIden::Title)).like(title_contains(search)),
            );
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let menus = sqlx::query_as_with::<_, Menu, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(Page::new(menus, &args, |menu| menu.id))
    }

    pub async fn find(&self, id: i64) -> Result<Option<Menu>> {
        let statement = select()
            .and_where(Expr::col((MenuIden::Table, MenuIden::Id)).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Menu, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Menu> {
        self.find(id).await?.or_not_found()
    }

    pub async fn get_by_category_id(
        &self,
        category_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Menu>> {
        let mut statement = select()
            .inner_join(
                CategoryMenu::Table,
                Expr::col((CategoryMenu::Table, CategoryMenu::MenuId))
                    .equals((MenuIden::Table, MenuIden::Id)),
            )
            .and_where(Expr::col((CategoryMenu::Table, CategoryMenu::CategoryId)).eq(category_id))
            .order_by((MenuIden::Table, MenuIden::Id), Order::Asc)
            .to_owned();

        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            statement.and_where(
                Expr::col((MenuIden::Table, MenuIden::Title)).like(title_contains(search)),
            );
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Menu, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Fetches one page and keeps the menus matching `needs`. The cursor
    /// follows the unfiltered page so callers can keep scrolling.
    pub async fn recommend(
        &self,
        args: Args,
        search: Option<&str>,
        needs: Needs,
    ) -> Result<Page<Menu>> {
        let mut page = self.fetch(args, search).await?;
        if needs.is_empty() {
            return Ok(page);
        }

        let mut seen = std::collections::HashSet::new();
        page.items
            .retain(|menu| needs.matches(&menu.features) && seen.insert(menu.id));

        tracing::debug!(kept = page.items.len(), "menu recommendation filtered");

        Ok(page)
    }

    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(MenuIden::Table)
            .columns([
                MenuIden::Title,
                MenuIden::Description,
                MenuIden::Price,
                MenuIden::ImageUrl,
                MenuIden::Nutrition,
                MenuIden::Features,
                MenuIden::CreatedAt,
                MenuIden::UpdatedAt,
            ])
            .values_panic([
                input.title.into(),
                input.description.into(),
                input.price.into(),
                input.image_url.into(),
                json_text(&input.nutrition).into(),
                json_text(&input.features).into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn gluten_free_need() {
        let needs = Needs {
            gluten_free: true,
            ..Default::default()
        };

        assert!(needs.matches(&json!({"gluten_free": true})));
        assert!(!needs.matches(&json!({"gluten_free": false})));
        assert!(!needs.matches(&json!({})));
    }

    #[test]
    fn high_protein_threshold() {
        let needs = Needs {
            high_protein: true,
            ..Default::default()
        };

        assert!(needs.matches(&json!({"high_protein": 20})));
        assert!(needs.matches(&json!({"high_protein": 32.5})));
        assert!(!needs.matches(&json!({"high_protein": 19})));
        assert!(!needs.matches(&json!({"high_protein": "lots"})));
    }

    #[test]
    fn any_active_need_is_enough() {
        let needs = Needs {
            gluten_free: true,
            vegetarian: true,
            high_protein: false,
        };

        assert!(needs.matches(&json!({"vegetarian": true})));
        assert!(needs.matches(&json!({"gluten_free": true, "vegetarian": false})));
        assert!(!needs.matches(&json!({"high_protein": 40})));
        assert!(Needs::default().is_empty());
    }
}
