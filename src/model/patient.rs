use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::address::{AddressDto, AddressInput};

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreatePatientInput {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub dob: NaiveDate,
    pub gender: Option<String>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
    pub address: Option<AddressInput>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePatientInput {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub dob: NaiveDate,
    pub gender: Option<String>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
    pub addresses: Vec<AddressDto>,
}

impl PatientDto {
    pub fn from_model(model: entity::patient::Model, addresses: Vec<entity::address::Model>) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            email: model.email,
            contact: model.contact,
            dob: model.dob,
            gender: model.gender,
            tenant_id: model.tenant_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            addresses: addresses.into_iter().map(AddressDto::from).collect(),
        }
    }
}
