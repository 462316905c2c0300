use mealkit_catalog::menu::Needs;
use mealkit_db::table::Personalisasi as PersonalisasiIden;
use mealkit_shared::{OrNotFound, Result};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};

/// Health and diet preferences of a user, one row per user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Personalisasi {
    pub id: i64,
    pub user_id: i64,
    pub diabetes: bool,
    pub gerd: bool,
    #[serde(rename = "asam_urat")]
    pub uric_acid: bool,
    #[serde(rename = "kolestrol")]
    pub cholesterol: bool,
    #[serde(rename = "rendah_karbohidrat")]
    pub low_carb: bool,
    #[serde(rename = "tinggi_protein")]
    pub high_protein: bool,
    pub vegetarian: bool,
    #[serde(rename = "rendah_gula")]
    pub low_sugar: bool,
    #[serde(rename = "rendah_kalori")]
    pub low_calorie: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Personalisasi> for Needs {
    fn from(value: &Personalisasi) -> Self {
        Needs {
            gluten_free: value.diabetes || value.low_sugar,
            high_protein: value.high_protein,
            vegetarian: value.vegetarian,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesInput {
    pub diabetes: bool,
    pub gerd: bool,
    #[serde(rename = "asam_urat")]
    pub uric_acid: bool,
    #[serde(rename = "kolestrol")]
    pub cholesterol: bool,
    #[serde(rename = "rendah_karbohidrat")]
    pub low_carb: bool,
    #[serde(rename = "tinggi_protein")]
    pub high_protein: bool,
    pub vegetarian: bool,
    #[serde(rename = "rendah_gula")]
    pub low_sugar: bool,
    #[serde(rename = "rendah_kalori")]
    pub low_calorie: bool,
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

impl Repository {
    pub async fn find(&self, user_id: i64) -> Result<Option<Personalisasi>> {
        let statement = Query::select()
            .columns([
                PersonalisasiIden::Id,
                PersonalisasiIden::UserId,
                PersonalisasiIden::Diabetes,
                PersonalisasiIden::Gerd,
                PersonalisasiIden::UricAcid,
                PersonalisasiIden::Cholesterol,
                PersonalisasiIden::LowCarb,
                PersonalisasiIden::HighProtein,
                PersonalisasiIden::Vegetarian,
                PersonalisasiIden::LowSugar,
                PersonalisasiIden::LowCalorie,
                PersonalisasiIden::CreatedAt,
                PersonalisasiIden::UpdatedAt,
            ])
            .from(PersonalisasiIden::Table)
            .and_where(Expr::col(PersonalisasiIden::UserId).eq(user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Personalisasi, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Stored preferences, or all flags off when the user never saved any.
    pub async fn get(&self, user_id: i64) -> Result<Personalisasi> {
        Ok(self.find(user_id).await?.unwrap_or(Personalisasi {
            user_id,
            ..Default::default()
        }))
    }

    pub async fn upsert(&self, user_id: i64, input: PreferencesInput) -> Result<Personalisasi> {
        let now = mealkit_shared::now();
        let statement = Query::insert()
            .into_table(PersonalisasiIden::Table)
            .columns([
                PersonalisasiIden::UserId,
                PersonalisasiIden::Diabetes,
                PersonalisasiIden::Gerd,
                PersonalisasiIden::UricAcid,
                PersonalisasiIden::Cholesterol,
                PersonalisasiIden::LowCarb,
                PersonalisasiIden::HighProtein,
                PersonalisasiIden::Vegetarian,
                PersonalisasiIden::LowSugar,
                PersonalisasiIden::LowCalorie,
                PersonalisasiIden::CreatedAt,
                PersonalisasiIden::UpdatedAt,
            ])
            .values_panic([
                user_id.into(),
                input.diabetes.into(),
                input.gerd.into(),
                input.uric_acid.into(),
                input.cholesterol.into(),
                input.low_carb.into(),
                input.high_protein.into(),
                input.vegetarian.into(),
                input.low_sugar.into(),
                input.low_calorie.into(),
                now.into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::column(PersonalisasiIden::UserId)
                    .update_columns([
                        PersonalisasiIden::Diabetes,
                        PersonalisasiIden::Gerd,
                        PersonalisasiIden::UricAcid,
                        PersonalisasiIden::Cholesterol,
                        PersonalisasiIden::LowCarb,
                        PersonalisasiIden::HighProtein,
                        PersonalisasiIden::Vegetarian,
                        PersonalisasiIden::LowSugar,
                        PersonalisasiIden::LowCalorie,
                        PersonalisasiIden::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(user_id, "personalisasi saved");

        self.find(user_id).await?.or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_from_preferences() {
        let prefs = Personalisasi {
            low_sugar: true,
            vegetarian: true,
            ..Default::default()
        };
        let needs = Needs::from(&prefs);

        assert!(needs.gluten_free);
        assert!(needs.vegetarian);
        assert!(!needs.high_protein);
        assert!(Needs::from(&Personalisasi::default()).is_empty());
    }

    #[test]
    fn wire_names() {
        let prefs = Personalisasi {
            uric_acid: true,
            high_protein: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&prefs).unwrap();

        assert_eq!(json["asam_urat"], true);
        assert_eq!(json["tinggi_protein"], true);
        assert_eq!(json["rendah_gula"], false);
    }
}
