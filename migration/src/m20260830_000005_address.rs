use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000003_practitioner::Practitioner;
use crate::m20260830_000004_patient::Patient;

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
                    .col(pk_auto(Address::Id))
                    .col(string_null(Address::HouseNo))
                    .col(string_null(Address::Street))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .col(string(Address::Country))
                    .col(string_len_null(Address::CountryCode, 10))
                    .col(string_len_null(Address::ZipCode, 20))
                    .col(string_null(Address::AddressType))
                    .col(uuid_null(Address::PractitionerId))
                    .col(uuid_null(Address::PatientId))
                    .col(timestamp(Address::CreatedAt))
                    .col(timestamp(Address::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_practitioner")
                            .from(Address::Table, Address::PractitionerId)
                            .to(Practitioner::Table, Practitioner::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_patient")
                            .from(Address::Table, Address::PatientId)
                            .to(Patient::Table, Patient::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // An address belongs to exactly one owner kind.
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE address ADD CONSTRAINT chk_address_single_owner \
                 CHECK ((practitioner_id IS NULL) <> (patient_id IS NULL))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    HouseNo,
    Street,
    City,
    State,
    Country,
    CountryCode,
    ZipCode,
    AddressType,
    PractitionerId,
    PatientId,
    CreatedAt,
    UpdatedAt,
}
