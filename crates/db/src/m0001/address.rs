use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Address;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Address::Table)
        .col(
            ColumnDef::new(Address::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Address::UserId).big_integer().not_null())
        .col(
            ColumnDef::new(Address::Label)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(ColumnDef::new(Address::Address).text().not_null())
        .col(
            ColumnDef::new(Address::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Address::Notes).text().not_null().default(""))
        .col(
            ColumnDef::new(Address::Phone)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(ColumnDef::new(Address::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Address::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Address::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_address_user_id")
        .table(Address::Table)
        .col(Address::UserId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_address_user_id")
        .table(Address::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
