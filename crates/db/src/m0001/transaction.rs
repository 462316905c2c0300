use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Transaction;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Transaction::Table)
        .col(
            ColumnDef::new(Transaction::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Transaction::UserId).big_integer().not_null())
        .col(ColumnDef::new(Transaction::CartId).integer().not_null())
        .col(ColumnDef::new(Transaction::PaymentId).big_integer().not_null())
        .col(ColumnDef::new(Transaction::CourierId).integer().not_null())
        .col(ColumnDef::new(Transaction::AddressId).integer().not_null())
        .col(
            ColumnDef::new(Transaction::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(ColumnDef::new(Transaction::Amount).double().not_null())
        .col(ColumnDef::new(Transaction::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Transaction::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Transaction::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_transaction_user_status")
        .table(Transaction::Table)
        .col(Transaction::UserId)
        .col(Transaction::Status)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_transaction_user_status")
        .table(Transaction::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
