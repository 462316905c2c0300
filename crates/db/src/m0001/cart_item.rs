use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Cart, CartItem};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CartItem::Table)
        .col(
            ColumnDef::new(CartItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(CartItem::CartId).integer().not_null())
        .col(ColumnDef::new(CartItem::MenuId).integer())
        .col(ColumnDef::new(CartItem::BundlingId).integer())
        .col(ColumnDef::new(CartItem::ImageUrl).text().not_null().default(""))
        .col(
            ColumnDef::new(CartItem::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(CartItem::Quantity).integer().not_null())
        .col(ColumnDef::new(CartItem::Price).double().not_null())
        .col(ColumnDef::new(CartItem::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(CartItem::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(CartItem::Table, CartItem::CartId)
                .to(Cart::Table, Cart::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CartItem::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_cart_item_cart_id")
        .table(CartItem::Table)
        .col(CartItem::CartId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_cart_item_cart_id")
        .table(CartItem::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
