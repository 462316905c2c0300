use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::FoodNutrition;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(FoodNutrition::Table)
        .col(
            ColumnDef::new(FoodNutrition::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(FoodNutrition::FoodName)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(FoodNutrition::Calories).integer().not_null().default(0))
        .col(ColumnDef::new(FoodNutrition::Protein).integer().not_null().default(0))
        .col(ColumnDef::new(FoodNutrition::Fat).integer().not_null().default(0))
        .col(
            ColumnDef::new(FoodNutrition::Carbohydrates)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(FoodNutrition::Sugar).integer().not_null().default(0))
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(FoodNutrition::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_food_nutrition_food_name")
        .table(FoodNutrition::Table)
        .col(FoodNutrition::FoodName)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_food_nutrition_food_name")
        .table(FoodNutrition::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
