use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::enums::{AccountStatus, PractitionerType};

use crate::model::address::{AddressDto, AddressInput};

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateUserInput {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub contact: Option<String>,
    #[serde(rename = "practitionerType")]
    #[schema(value_type = String)]
    pub practitioner_type: PractitionerType,
    pub specialization: Option<String>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
    pub address: Option<AddressInput>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserInput {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub specialization: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<AccountStatus>,
}

/// Practitioner as returned to clients. The password column never leaves the
/// service layer.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub contact: Option<String>,
    #[serde(rename = "practitionerType")]
    #[schema(value_type = String)]
    pub practitioner_type: PractitionerType,
    pub specialization: Option<String>,
    #[schema(value_type = String)]
    pub status: AccountStatus,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
    pub addresses: Vec<AddressDto>,
}

impl UserDto {
    pub fn from_model(
        model: entity::practitioner::Model,
        addresses: Vec<entity::address::Model>,
    ) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            email: model.email,
            contact: model.contact,
            practitioner_type: model.practitioner_type,
            specialization: model.specialization,
            status: model.status,
            tenant_id: model.tenant_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            addresses: addresses.into_iter().map(AddressDto::from).collect(),
        }
    }
}
