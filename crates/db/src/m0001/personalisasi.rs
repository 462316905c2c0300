use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Personalisasi;

fn create_table() -> TableCreateStatement {
    let flag = |column: Personalisasi| {
        ColumnDef::new(column)
            .boolean()
            .not_null()
            .default(false)
            .to_owned()
    };

    Table::create()
        .table(Personalisasi::Table)
        .col(
            ColumnDef::new(Personalisasi::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Personalisasi::UserId).big_integer().not_null())
        .col(flag(Personalisasi::Diabetes))
        .col(flag(Personalisasi::Gerd))
        .col(flag(Personalisasi::UricAcid))
        .col(flag(Personalisasi::Cholesterol))
        .col(flag(Personalisasi::LowCarb))
        .col(flag(Personalisasi::HighProtein))
        .col(flag(Personalisasi::Vegetarian))
        .col(flag(Personalisasi::LowSugar))
        .col(flag(Personalisasi::LowCalorie))
        .col(ColumnDef::new(Personalisasi::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Personalisasi::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Personalisasi::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_personalisasi_user_id")
        .table(Personalisasi::Table)
        .unique()
        .col(Personalisasi::UserId)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_personalisasi_user_id")
        .table(Personalisasi::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
