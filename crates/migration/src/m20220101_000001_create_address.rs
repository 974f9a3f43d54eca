//! Create `address` table.
//!
//! The id is caller-supplied, so the primary key is a plain string column
//! with no auto-increment.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(string_len(Address::Id, 64).primary_key())
                    .col(string(Address::Street).not_null())
                    .col(string_null(Address::City))
                    .col(string(Address::Country).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, Street, City, Country }
