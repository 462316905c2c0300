use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Courier;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Courier::Table)
        .col(
            ColumnDef::new(Courier::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Courier::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Courier::Logo).text().not_null().default(""))
        .col(ColumnDef::new(Courier::Price).double().not_null().default(0))
        .col(ColumnDef::new(Courier::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Courier::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Courier::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);
