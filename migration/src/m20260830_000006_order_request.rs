use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000004_patient::Patient;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(OrderRequest::OrderId))
                    .col(uuid(OrderRequest::PatientId))
                    .col(uuid_null(OrderRequest::ClinicId))
                    .col(integer_null(OrderRequest::AddressId))
                    .col(string(OrderRequest::ProductList))
                    .col(string(OrderRequest::ProductType))
                    .col(string_null(OrderRequest::Shade))
                    .col(json_binary(OrderRequest::ToothNumbers))
                    .col(string_len(OrderRequest::Priority, 10))
                    .col(string_len(OrderRequest::Status, 20))
                    .col(timestamp(OrderRequest::OrderDate))
                    .col(timestamp(OrderRequest::ExpectedDelivery))
                    .col(string_len_null(OrderRequest::DesignNotes, 300))
                    .col(blob(OrderRequest::Image))
                    .col(string(OrderRequest::ImageMimeType))
                    .col(json_binary(OrderRequest::Image3d))
                    .col(string_null(OrderRequest::Comment))
                    .col(timestamp(OrderRequest::CreatedAt))
                    .col(timestamp(OrderRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_request_patient")
                            .from(OrderRequest::Table, OrderRequest::PatientId)
                            .to(Patient::Table, Patient::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_request_patient")
                    .table(OrderRequest::Table)
                    .col(OrderRequest::PatientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrderRequest {
    Table,
    OrderId,
    PatientId,
    ClinicId,
    AddressId,
    ProductList,
    ProductType,
    Shade,
    ToothNumbers,
    Priority,
    Status,
    OrderDate,
    ExpectedDelivery,
    DesignNotes,
    Image,
    ImageMimeType,
    Image3d,
    Comment,
    CreatedAt,
    UpdatedAt,
}
