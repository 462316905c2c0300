use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Banner;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Banner::Table)
        .col(
            ColumnDef::new(Banner::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Banner::Title)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Banner::ImageUrl).text().not_null().default(""))
        .col(ColumnDef::new(Banner::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Banner::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Banner::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);
