use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Address submitted alongside a patient or practitioner create request.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressInput {
    pub house_no: Option<String>,
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
    pub address_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    pub id: i32,
    pub house_no: Option<String>,
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
    pub address_type: Option<String>,
}

impl From<entity::address::Model> for AddressDto {
    fn from(model: entity::address::Model) -> Self {
        Self {
            id: model.id,
            house_no: model.house_no,
            street: model.street,
            city: model.city,
            state: model.state,
            country: model.country,
            country_code: model.country_code,
            zip_code: model.zip_code,
            address_type: model.address_type,
        }
    }
}
