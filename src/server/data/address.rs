use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::model::address::AddressInput;

/// Which account kind an address belongs to. Exactly one owner column is set
/// per row, enforced by a database check constraint.
#[derive(Clone, Copy, Debug)]
pub enum AddressOwner {
    Practitioner(Uuid),
    Patient(Uuid),
}

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an address for the given owner
    pub async fn insert(
        &self,
        owner: AddressOwner,
        input: AddressInput,
    ) -> Result<entity::address::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        let (practitioner_id, patient_id) = match owner {
            AddressOwner::Practitioner(id) => (Some(id), None),
            AddressOwner::Patient(id) => (None, Some(id)),
        };

        let now = Utc::now().naive_utc();

        let address = entity::address::ActiveModel {
            id: ActiveValue::NotSet,
            house_no: ActiveValue::Set(input.house_no),
            street: ActiveValue::Set(input.street),
            city: ActiveValue::Set(input.city),
            state: ActiveValue::Set(input.state),
            country: ActiveValue::Set(input.country),
            country_code: ActiveValue::Set(input.country_code),
            zip_code: ActiveValue::Set(input.zip_code),
            address_type: ActiveValue::Set(input.address_type),
            practitioner_id: ActiveValue::Set(practitioner_id),
            patient_id: ActiveValue::Set(patient_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        address.insert(self.db).await
    }

    /// Returns every address belonging to the owner
    pub async fn find_by_owner(
        &self,
        owner: AddressOwner,
    ) -> Result<Vec<entity::address::Model>, DbErr> {
        let query = match owner {
            AddressOwner::Practitioner(id) => entity::prelude::Address::find()
                .filter(entity::address::Column::PractitionerId.eq(id)),
            AddressOwner::Patient(id) => {
                entity::prelude::Address::find().filter(entity::address::Column::PatientId.eq(id))
            }
        };

        query.all(self.db).await
    }

    /// Deletes every address belonging to the owner
    pub async fn delete_by_owner(&self, owner: AddressOwner) -> Result<DeleteResult, DbErr> {
        let query = match owner {
            AddressOwner::Practitioner(id) => entity::prelude::Address::delete_many()
                .filter(entity::address::Column::PractitionerId.eq(id)),
            AddressOwner::Patient(id) => entity::prelude::Address::delete_many()
                .filter(entity::address::Column::PatientId.eq(id)),
        };

        query.exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::{
        model::address::AddressInput,
        server::{
            data::address::{AddressOwner, AddressRepository},
            util::test::{fixtures::mock_patient, setup::test_setup_with_account_tables},
        },
    };

    fn address_input(city: &str) -> AddressInput {
        AddressInput {
            house_no: Some("12".to_string()),
            street: Some("Main St".to_string()),
            city: city.to_string(),
            state: "TX".to_string(),
            country: "USA".to_string(),
            country_code: Some("US".to_string()),
            zip_code: Some("75001".to_string()),
            address_type: Some("HOME".to_string()),
        }
    }

    /// Expect addresses to come back only for their owner
    #[tokio::test]
    async fn test_insert_and_find_by_owner() -> Result<(), DbErr> {
        let db = test_setup_with_account_tables().await?;
        let repository = AddressRepository::new(&db);

        let patient = mock_patient(&db).await?;
        let other = mock_patient(&db).await?;

        repository
            .insert(AddressOwner::Patient(patient.id), address_input("Dallas"))
            .await?;
        repository
            .insert(AddressOwner::Patient(patient.id), address_input("Austin"))
            .await?;

        let addresses = repository
            .find_by_owner(AddressOwner::Patient(patient.id))
            .await?;
        assert_eq!(addresses.len(), 2);

        let none = repository
            .find_by_owner(AddressOwner::Patient(other.id))
            .await?;
        assert!(none.is_empty());

        Ok(())
    }

    /// Expect delete_by_owner to remove all of the owner's addresses
    #[tokio::test]
    async fn test_delete_by_owner() -> Result<(), DbErr> {
        let db = test_setup_with_account_tables().await?;
        let repository = AddressRepository::new(&db);

        let patient = mock_patient(&db).await?;
        repository
            .insert(AddressOwner::Patient(patient.id), address_input("Dallas"))
            .await?;

        let result = repository
            .delete_by_owner(AddressOwner::Patient(patient.id))
            .await?;
        assert_eq!(result.rows_affected, 1);

        let remaining = repository
            .find_by_owner(AddressOwner::Patient(patient.id))
            .await?;
        assert!(remaining.is_empty());

        Ok(())
    }
}
