//! Patient accounts and their addresses.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::patient::{CreatePatientInput, PatientDto, UpdatePatientInput},
    server::{
        data::{
            address::{AddressOwner, AddressRepository},
            patient::PatientRepository,
        },
        error::{account::AccountError, Error},
    },
};

/// Trims and lowercases an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct PatientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientService<'a> {
    /// Creates a new instance of [`PatientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a patient and their optional address in one transaction
    pub async fn create_patient(&self, input: CreatePatientInput) -> Result<PatientDto, Error> {
        let email = normalize_email(&input.email);

        if PatientRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AccountError::PatientEmailExists(email).into());
        }

        let now = Utc::now().naive_utc();

        let txn = self.db.begin().await?;

        let patient = PatientRepository::new(&txn)
            .insert(entity::patient::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                first_name: ActiveValue::Set(input.first_name),
                middle_name: ActiveValue::Set(input.middle_name),
                last_name: ActiveValue::Set(input.last_name),
                email: ActiveValue::Set(email),
                contact: ActiveValue::Set(input.contact),
                dob: ActiveValue::Set(input.dob),
                gender: ActiveValue::Set(input.gender),
                tenant_id: ActiveValue::Set(input.tenant_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .await?;

        let mut addresses = Vec::new();
        if let Some(address) = input.address {
            addresses.push(
                AddressRepository::new(&txn)
                    .insert(AddressOwner::Patient(patient.id), address)
                    .await?,
            );
        }

        txn.commit().await?;

        Ok(PatientDto::from_model(patient, addresses))
    }

    /// Fetches a patient with their addresses
    pub async fn get_patient(&self, id: Uuid) -> Result<PatientDto, Error> {
        let patient = PatientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AccountError::PatientNotFound(id))?;

        let addresses = AddressRepository::new(self.db)
            .find_by_owner(AddressOwner::Patient(id))
            .await?;

        Ok(PatientDto::from_model(patient, addresses))
    }

    /// Lists patients, optionally scoped to a tenant, newest first
    pub async fn list_patients(&self, tenant_id: Option<Uuid>) -> Result<Vec<PatientDto>, Error> {
        let patients = PatientRepository::new(self.db).find_all(tenant_id).await?;

        let address_repository = AddressRepository::new(self.db);

        let mut dtos = Vec::with_capacity(patients.len());
        for patient in patients {
            let addresses = address_repository
                .find_by_owner(AddressOwner::Patient(patient.id))
                .await?;

            dtos.push(PatientDto::from_model(patient, addresses));
        }

        Ok(dtos)
    }

    /// Partially updates a patient; a changed email is re-checked for
    /// conflicts
    pub async fn update_patient(
        &self,
        id: Uuid,
        input: UpdatePatientInput,
    ) -> Result<PatientDto, Error> {
        let repository = PatientRepository::new(self.db);

        let patient = repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::PatientNotFound(id))?;

        let mut active: entity::patient::ActiveModel = patient.clone().into();

        if let Some(email) = input.email {
            let email = normalize_email(&email);

            if email != patient.email {
                if repository.find_by_email(&email).await?.is_some() {
                    return Err(AccountError::PatientEmailExists(email).into());
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
        if let Some(dob) = input.dob {
            active.dob = ActiveValue::Set(dob);
        }
        if let Some(gender) = input.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = repository.update(active).await?;

        let addresses = AddressRepository::new(self.db)
            .find_by_owner(AddressOwner::Patient(id))
            .await?;

        Ok(PatientDto::from_model(updated, addresses))
    }

    /// Deletes a patient and their addresses
    pub async fn delete_patient(&self, id: Uuid) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        AddressRepository::new(&txn)
            .delete_by_owner(AddressOwner::Patient(id))
            .await?;

        let result = PatientRepository::new(&txn).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(AccountError::PatientNotFound(id).into());
        }

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::normalize_email;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Jane.Doe@Example.COM "),
            "jane.doe@example.com"
        );
    }

    mod create_tests {
        use crate::{
            model::patient::CreatePatientInput,
            server::{
                error::{account::AccountError, Error},
                service::patient::PatientService,
                util::test::setup::test_setup_with_account_tables,
            },
        };
        use chrono::NaiveDate;

        use super::DbErr;

        fn create_input(email: &str) -> CreatePatientInput {
            CreatePatientInput {
                first_name: "Jane".to_string(),
                middle_name: None,
                last_name: "Doe".to_string(),
                email: email.to_string(),
                contact: None,
                dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                gender: None,
                tenant_id: None,
                address: None,
            }
        }

        /// Expect the stored email to be trimmed and lowercased
        #[tokio::test]
        async fn test_create_patient_normalizes_email() -> Result<(), DbErr> {
            let db = test_setup_with_account_tables().await?;
            let service = PatientService::new(&db);

            let patient = service
                .create_patient(create_input(" Jane.Doe@Example.com "))
                .await
                .unwrap();

            assert_eq!(patient.email, "jane.doe@example.com");

            Ok(())
        }

        /// Expect a conflict when the normalized email already exists
        #[tokio::test]
        async fn test_create_patient_duplicate_email() -> Result<(), DbErr> {
            let db = test_setup_with_account_tables().await?;
            let service = PatientService::new(&db);

            service
                .create_patient(create_input("jane.doe@example.com"))
                .await
                .unwrap();

            let result = service
                .create_patient(create_input("JANE.DOE@example.com"))
                .await;

            assert!(matches!(
                result,
                Err(Error::AccountError(AccountError::PatientEmailExists(_)))
            ));

            Ok(())
        }
    }
}
