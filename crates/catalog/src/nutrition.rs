use mealkit_db::table::FoodNutrition;
use mealkit_shared::{OrNotFound, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Nutrition {
    pub id: i64,
    pub food_name: String,
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbohydrates: i64,
    pub sugar: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 255))]
    pub food_name: String,
    #[validate(range(min = 0))]
    pub calories: i64,
    #[validate(range(min = 0))]
    pub protein: i64,
    #[validate(range(min = 0))]
    pub fat: i64,
    #[validate(range(min = 0))]
    pub carbohydrates: i64,
    #[validate(range(min = 0))]
    pub sugar: i64,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

impl Repository {
    /// Nutrition facts for a classifier label, the first match by id.
    pub async fn get_by_classification(&self, food_name: &str) -> Result<Nutrition> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            mealkit_shared::bail!("classification is required");
        }

        let statement = Query::select()
            .columns([
                FoodNutrition::Id,
                FoodNutrition::FoodName,
                FoodNutrition::Calories,
                FoodNutrition::Protein,
                FoodNutrition::Fat,
                FoodNutrition::Carbohydrates,
                FoodNutrition::Sugar,
            ])
            .from(FoodNutrition::Table)
            .and_where(Expr::col(FoodNutrition::FoodName).eq(food_name))
            .order_by(FoodNutrition::Id, Order::Asc)
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Nutrition, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .or_not_found()
    }

    pub async fn create(&self, input: CreateInput) -> Result<i64> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(FoodNutrition::Table)
            .columns([
                FoodNutrition::FoodName,
                FoodNutrition::Calories,
                FoodNutrition::Protein,
                FoodNutrition::Fat,
                FoodNutrition::Carbohydrates,
                FoodNutrition::Sugar,
            ])
            .values_panic([
                input.food_name.into(),
                input.calories.into(),
                input.protein.into(),
                input.fat.into(),
                input.carbohydrates.into(),
                input.sugar.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.last_insert_rowid())
    }
}
