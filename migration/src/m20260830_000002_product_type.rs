use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_product_list::ProductList;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductType::Table)
                    .if_not_exists()
                    .col(pk_uuid(ProductType::ProductId))
                    .col(uuid(ProductType::ListId))
                    .col(string(ProductType::ProductName))
                    .col(blob_null(ProductType::ProductImage))
                    .col(timestamp(ProductType::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_type_list")
                            .from(ProductType::Table, ProductType::ListId)
                            .to(ProductList::Table, ProductList::ListId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_type_name")
                    .table(ProductType::Table)
                    .col(ProductType::ProductName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductType {
    Table,
    ProductId,
    ListId,
    ProductName,
    ProductImage,
    CreatedAt,
}
