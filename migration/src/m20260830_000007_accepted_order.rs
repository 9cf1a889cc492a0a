use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000006_order_request::OrderRequest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcceptedOrder::Table)
                    .if_not_exists()
                    .col(pk_uuid(AcceptedOrder::OrderId))
                    .col(uuid(AcceptedOrder::PatientId))
                    .col(uuid_null(AcceptedOrder::ClinicId))
                    .col(integer_null(AcceptedOrder::AddressId))
                    .col(string(AcceptedOrder::ProductList))
                    .col(string(AcceptedOrder::ProductType))
                    .col(string_null(AcceptedOrder::Shade))
                    .col(json_binary(AcceptedOrder::ToothNumbers))
                    .col(string_len(AcceptedOrder::Priority, 10))
                    .col(string_len(AcceptedOrder::Status, 20))
                    .col(timestamp(AcceptedOrder::OrderDate))
                    .col(timestamp(AcceptedOrder::ExpectedDelivery))
                    .col(string_len_null(AcceptedOrder::DesignNotes, 300))
                    .col(blob(AcceptedOrder::Image))
                    .col(string(AcceptedOrder::ImageMimeType))
                    .col(json_binary(AcceptedOrder::Image3d))
                    .col(string_null(AcceptedOrder::Comment))
                    .col(string_null(AcceptedOrder::TrackingNo))
                    .col(string_len_null(AcceptedOrder::ShipmentProvider, 10))
                    .col(timestamp(AcceptedOrder::CreatedAt))
                    .col(timestamp(AcceptedOrder::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accepted_order_request")
                            .from(AcceptedOrder::Table, AcceptedOrder::OrderId)
                            .to(OrderRequest::Table, OrderRequest::OrderId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcceptedOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AcceptedOrder {
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
    TrackingNo,
    ShipmentProvider,
    CreatedAt,
    UpdatedAt,
}
