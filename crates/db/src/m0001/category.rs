use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Category, CategoryMenu, Menu};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Category::Table)
        .col(
            ColumnDef::new(Category::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Category::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Category::ImageUrl).text().not_null().default(""))
        .col(ColumnDef::new(Category::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Category::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Category::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_menu_table() -> TableCreateStatement {
    Table::create()
        .table(CategoryMenu::Table)
        .col(ColumnDef::new(CategoryMenu::CategoryId).integer().not_null())
        .col(ColumnDef::new(CategoryMenu::MenuId).integer().not_null())
        .primary_key(
            Index::create()
                .col(CategoryMenu::CategoryId)
                .col(CategoryMenu::MenuId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(CategoryMenu::Table, CategoryMenu::CategoryId)
                .to(Category::Table, Category::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(CategoryMenu::Table, CategoryMenu::MenuId)
                .to(Menu::Table, Menu::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_menu_table() -> TableDropStatement {
    Table::drop().table(CategoryMenu::Table).to_owned()
}

operation!(CreateMenuTable, create_menu_table, drop_menu_table);
