use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Bundling, BundlingMenu, Menu};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BundlingMenu::Table)
        .col(
            ColumnDef::new(BundlingMenu::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(BundlingMenu::BundlingId).integer().not_null())
        .col(ColumnDef::new(BundlingMenu::MenuId).integer().not_null())
        .col(ColumnDef::new(BundlingMenu::DayNumber).integer().not_null())
        .col(
            ColumnDef::new(BundlingMenu::MealDescription)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(BundlingMenu::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(BundlingMenu::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(BundlingMenu::Table, BundlingMenu::BundlingId)
                .to(Bundling::Table, Bundling::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(BundlingMenu::Table, BundlingMenu::MenuId)
                .to(Menu::Table, Menu::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BundlingMenu::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_bundling_menu_day")
        .table(BundlingMenu::Table)
        .col(BundlingMenu::BundlingId)
        .col(BundlingMenu::DayNumber)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_bundling_menu_day")
        .table(BundlingMenu::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
