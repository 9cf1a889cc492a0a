use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Practitioner::Table)
                    .if_not_exists()
                    .col(pk_uuid(Practitioner::Id))
                    .col(string(Practitioner::FirstName))
                    .col(string_null(Practitioner::MiddleName))
                    .col(string(Practitioner::LastName))
                    .col(string_uniq(Practitioner::Email))
                    .col(string_null(Practitioner::Contact))
                    .col(string_len(Practitioner::PractitionerType, 20))
                    .col(string_null(Practitioner::Specialization))
                    .col(string_len(Practitioner::Status, 10))
                    .col(string(Practitioner::Password))
                    .col(uuid_null(Practitioner::TenantId))
                    .col(timestamp(Practitioner::CreatedAt))
                    .col(timestamp(Practitioner::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Practitioner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Practitioner {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Contact,
    PractitionerType,
    Specialization,
    Status,
    Password,
    TenantId,
    CreatedAt,
    UpdatedAt,
}
