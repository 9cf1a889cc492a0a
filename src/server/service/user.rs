//! Practitioner accounts ("users" on the API surface) and their addresses.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use entity::enums::{AccountStatus, PractitionerType};

use crate::{
    model::user::{CreateUserInput, UpdateUserInput, UserDto},
    server::{
        data::{
            address::{AddressOwner, AddressRepository},
            practitioner::PractitionerRepository,
        },
        error::{account::AccountError, Error},
        service::patient::normalize_email,
    },
};

/// Initial password assigned on creation until the practitioner sets their
/// own through the separate credentials flow.
fn default_password(first_name: &str) -> String {
    format!("{first_name}@2026")
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a practitioner and their optional address in one transaction
    pub async fn create_user(&self, input: CreateUserInput) -> Result<UserDto, Error> {
        let email = normalize_email(&input.email);

        if PractitionerRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AccountError::UserEmailExists(email).into());
        }

        let now = Utc::now().naive_utc();
        let password = default_password(&input.first_name);

        let txn = self.db.begin().await?;

        let practitioner = PractitionerRepository::new(&txn)
            .insert(entity::practitioner::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                first_name: ActiveValue::Set(input.first_name),
                middle_name: ActiveValue::Set(input.middle_name),
                last_name: ActiveValue::Set(input.last_name),
                email: ActiveValue::Set(email),
                contact: ActiveValue::Set(input.contact),
                practitioner_type: ActiveValue::Set(input.practitioner_type),
                specialization: ActiveValue::Set(input.specialization),
                status: ActiveValue::Set(AccountStatus::Active),
                password: ActiveValue::Set(password),
                tenant_id: ActiveValue::Set(input.tenant_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .await?;

        let mut addresses = Vec::new();
        if let Some(address) = input.address {
            addresses.push(
                AddressRepository::new(&txn)
                    .insert(AddressOwner::Practitioner(practitioner.id), address)
                    .await?,
            );
        }

        txn.commit().await?;

        Ok(UserDto::from_model(practitioner, addresses))
    }

    /// Fetches a practitioner with their addresses
    pub async fn get_user(&self, id: Uuid) -> Result<UserDto, Error> {
        let practitioner = PractitionerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AccountError::UserNotFound(id))?;

        let addresses = AddressRepository::new(self.db)
            .find_by_owner(AddressOwner::Practitioner(id))
            .await?;

        Ok(UserDto::from_model(practitioner, addresses))
    }

    /// Lists practitioners, optionally filtered by type and tenant scope
    pub async fn list_users(
        &self,
        practitioner_type: Option<PractitionerType>,
        tenant_id: Option<Uuid>,
    ) -> Result<Vec<UserDto>, Error> {
        let practitioners = PractitionerRepository::new(self.db)
            .find_all(practitioner_type, tenant_id)
            .await?;

        let address_repository = AddressRepository::new(self.db);

        let mut dtos = Vec::with_capacity(practitioners.len());
        for practitioner in practitioners {
            let addresses = address_repository
                .find_by_owner(AddressOwner::Practitioner(practitioner.id))
                .await?;

            dtos.push(UserDto::from_model(practitioner, addresses));
        }

        Ok(dtos)
    }

    /// Partially updates a practitioner; a changed email is re-checked for
    /// conflicts
    pub async fn update_user(&self, id: Uuid, input: UpdateUserInput) -> Result<UserDto, Error> {
        let repository = PractitionerRepository::new(self.db);

        let practitioner = repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::UserNotFound(id))?;

        let mut active: entity::practitioner::ActiveModel = practitioner.clone().into();

        if let Some(email) = input.email {
            let email = normalize_email(&email);

            if email != practitioner.email {
                if repository.find_by_email(&email).await?.is_some() {
                    return Err(AccountError::UserEmailExists(email).into());
                }

                active.email = ActiveValue::Set(email);
            }
        }

        if let Some(first_name) = input.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(middle_name) = input.middle_name {
            active.middle_name = ActiveValue::Set(Some(middle_name));
        }
        if let Some(last_name) = input.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(contact) = input.contact {
            active.contact = ActiveValue::Set(Some(contact));
        }
        if let Some(specialization) = input.specialization {
            active.specialization = ActiveValue::Set(Some(specialization));
        }
        if let Some(status) = input.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = repository.update(active).await?;

        let addresses = AddressRepository::new(self.db)
            .find_by_owner(AddressOwner::Practitioner(id))
            .await?;

        Ok(UserDto::from_model(updated, addresses))
    }

    /// Deletes a practitioner and their addresses
    pub async fn delete_user(&self, id: Uuid) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        AddressRepository::new(&txn)
            .delete_by_owner(AddressOwner::Practitioner(id))
            .await?;

        let result = PractitionerRepository::new(&txn).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(AccountError::UserNotFound(id).into());
        }

        txn.commit().await?;

        Ok(())
    }
}
