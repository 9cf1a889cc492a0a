use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(pk_uuid(Patient::Id))
                    .col(string(Patient::FirstName))
                    .col(string_null(Patient::MiddleName))
                    .col(string(Patient::LastName))
                    .col(string_uniq(Patient::Email))
                    .col(string_null(Patient::Contact))
                    .col(date(Patient::Dob))
                    .col(string_null(Patient::Gender))
                    .col(uuid_null(Patient::TenantId))
                    .col(timestamp(Patient::CreatedAt))
                    .col(timestamp(Patient::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Contact,
    Dob,
    Gender,
    TenantId,
    CreatedAt,
    UpdatedAt,
}
