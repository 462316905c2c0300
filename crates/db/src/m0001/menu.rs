use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Menu;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Menu::Table)
        .col(
            ColumnDef::new(Menu::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Menu::Title)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Menu::Description).text().not_null().default(""))
        .col(ColumnDef::new(Menu::Price).double().not_null().default(0))
        .col(ColumnDef::new(Menu::ImageUrl).text().not_null().default(""))
        .col(ColumnDef::new(Menu::Nutrition).text().not_null().default("{}"))
        .col(ColumnDef::new(Menu::Features).text().not_null().default("{}"))
        .col(ColumnDef::new(Menu::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Menu::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Menu::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);
