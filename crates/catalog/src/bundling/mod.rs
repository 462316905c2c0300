mod aggregator;
pub mod grouping;
mod repository;

pub use aggregator::*;
pub use repository::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::menu::Menu;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BundlingType {
    #[default]
    Daily,
    Monthly,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundling {
    pub id: i64,
    pub image_url: String,
    #[serde(rename = "bundling_name")]
    pub name: String,
    pub bundling_type: BundlingType,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bundling {
    /// A bundling carrying only its id, as loaded from a foreign key.
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn is_monthly(&self) -> bool {
        self.bundling_type == BundlingType::Monthly
    }
}

/// One scheduled meal of a bundling. Freshly loaded rows only carry the ids
/// of `bundling` and `menu`; the aggregator hydrates both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundlingMenu {
    pub id: i64,
    pub day_number: i64,
    pub meal_description: String,
    pub bundling: Bundling,
    pub menu: Menu,
    pub created_at: i64,
    pub updated_at: i64,
}
