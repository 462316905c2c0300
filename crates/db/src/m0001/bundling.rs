use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Bundling;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Bundling::Table)
        .col(
            ColumnDef::new(Bundling::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Bundling::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Bundling::BundlingType)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(ColumnDef::new(Bundling::Price).double().not_null().default(0))
        .col(ColumnDef::new(Bundling::ImageUrl).text().not_null().default(""))
        .col(ColumnDef::new(Bundling::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Bundling::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Bundling::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);
