use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Cart;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Cart::Table)
        .col(
            ColumnDef::new(Cart::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Cart::UserId).big_integer().not_null())
        .col(
            ColumnDef::new(Cart::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(ColumnDef::new(Cart::TotalPrice).double().not_null().default(0))
        .col(ColumnDef::new(Cart::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Cart::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Cart::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_cart_user_status")
        .table(Cart::Table)
        .col(Cart::UserId)
        .col(Cart::Status)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_cart_user_status")
        .table(Cart::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
