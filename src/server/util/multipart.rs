//! Parsing of multipart order submissions.
//!
//! Orders arrive as `multipart/form-data`: scalar fields as text parts, 3D
//! scans as file parts named `image_3d`. A part named `image` is accepted for
//! wire compatibility but ignored, the reference image always comes from the
//! product catalog.

use axum::extract::Multipart;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    model::order::{CreateOrderInput, UpdateOrderInput, UploadFile},
    server::error::Error,
};

const ATTACHMENT_FIELD: &str = "image_3d";
const IGNORED_IMAGE_FIELD: &str = "image";

/// All parts of one multipart order submission, split into text fields and
/// file attachments. Repeated field names keep every value in order.
#[derive(Default)]
pub struct OrderForm {
    fields: Vec<(String, String)>,
    pub attachments: Vec<UploadFile>,
}

impl OrderForm {
    pub async fn read(multipart: &mut Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(part) = multipart.next_field().await? {
            let Some(name) = part.name().map(str::to_string) else {
                continue;
            };

            if name == ATTACHMENT_FIELD {
                let file_name = part
                    .file_name()
                    .unwrap_or("attachment.bin")
                    .to_string();
                let content_type = part
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = part.bytes().await?.to_vec();

                form.attachments.push(UploadFile {
                    file_name,
                    content_type,
                    bytes,
                });
            } else if name == IGNORED_IMAGE_FIELD {
                // Drain and drop; the stored image is the catalog image.
                part.bytes().await?;
            } else {
                form.fields.push((name, part.text().await?));
            }
        }

        Ok(form)
    }

    fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    fn all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    fn required(&self, name: &str) -> Result<&str, Error> {
        self.first(name)
            .ok_or_else(|| Error::ValidationError(format!("Missing required field: {name}")))
    }

    fn parse_required<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        parse_enum(self.required(name)?)
            .ok_or_else(|| Error::ValidationError(format!("Invalid value for field: {name}")))
    }

    fn parse_optional<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, Error> {
        self.first(name)
            .map(|raw| {
                parse_enum(raw).ok_or_else(|| {
                    Error::ValidationError(format!("Invalid value for field: {name}"))
                })
            })
            .transpose()
    }

    fn parse_uuid(&self, name: &str) -> Result<Uuid, Error> {
        Uuid::parse_str(self.required(name)?)
            .map_err(|_| Error::ValidationError(format!("{name} must be a valid UUID")))
    }

    fn parse_uuid_optional(&self, name: &str) -> Result<Option<Uuid>, Error> {
        self.first(name)
            .map(|raw| {
                Uuid::parse_str(raw)
                    .map_err(|_| Error::ValidationError(format!("{name} must be a valid UUID")))
            })
            .transpose()
    }

    fn parse_i32_optional(&self, name: &str) -> Result<Option<i32>, Error> {
        self.first(name)
            .map(|raw| {
                raw.parse::<i32>()
                    .map_err(|_| Error::ValidationError(format!("{name} must be an integer")))
            })
            .transpose()
    }

    fn parse_datetime_required(&self, name: &str) -> Result<NaiveDateTime, Error> {
        parse_datetime(self.required(name)?)
            .ok_or_else(|| Error::ValidationError(format!("{name} must be a valid timestamp")))
    }

    fn parse_datetime_optional(&self, name: &str) -> Result<Option<NaiveDateTime>, Error> {
        self.first(name)
            .map(|raw| {
                parse_datetime(raw).ok_or_else(|| {
                    Error::ValidationError(format!("{name} must be a valid timestamp"))
                })
            })
            .transpose()
    }

    /// Tooth numbers arrive either as repeated `tooth_numbers` fields or as a
    /// single JSON array.
    fn parse_tooth_numbers(&self) -> Result<Option<Vec<i32>>, Error> {
        let values = self.all("tooth_numbers");

        if values.is_empty() {
            return Ok(None);
        }

        if values.len() == 1 && values[0].trim_start().starts_with('[') {
            return serde_json::from_str(values[0])
                .map(Some)
                .map_err(|_| invalid_tooth_numbers());
        }

        values
            .iter()
            .map(|raw| raw.parse::<i32>().map_err(|_| invalid_tooth_numbers()))
            .collect::<Result<Vec<i32>, Error>>()
            .map(Some)
    }

    /// Retained attachment URLs arrive as repeated fields or a JSON array.
    fn parse_existing_urls(&self) -> Result<Option<Vec<String>>, Error> {
        let values = self.all("existing_image_3d_urls");

        if values.is_empty() {
            return Ok(None);
        }

        if values.len() == 1 && values[0].trim_start().starts_with('[') {
            return serde_json::from_str(values[0]).map(Some).map_err(|_| {
                Error::ValidationError(
                    "existing_image_3d_urls must be a JSON array of strings".to_string(),
                )
            });
        }

        Ok(Some(values.into_iter().map(str::to_string).collect()))
    }

    pub fn create_input(&self) -> Result<CreateOrderInput, Error> {
        Ok(CreateOrderInput {
            patient_id: self.parse_uuid("patient_id")?,
            clinic_id: self.parse_uuid_optional("clinic_id")?,
            address_id: self.parse_i32_optional("address_id")?,
            product_list: self.required("product_list")?.to_string(),
            product_type: self.required("product_type")?.to_string(),
            shade: self.first("shade").map(str::to_string),
            tooth_numbers: self.parse_tooth_numbers()?.unwrap_or_default(),
            priority: self.parse_required("priority")?,
            status: self.parse_optional("status")?,
            order_date: self.parse_datetime_required("order_date")?,
            expected_delivery: self.parse_datetime_required("expected_delivery")?,
            design_notes: self.first("design_notes").map(str::to_string),
            comment: self.first("comment").map(str::to_string),
        })
    }

    pub fn update_input(&self) -> Result<UpdateOrderInput, Error> {
        Ok(UpdateOrderInput {
            clinic_id: self.parse_uuid_optional("clinic_id")?,
            address_id: self.parse_i32_optional("address_id")?,
            product_list: self.first("product_list").map(str::to_string),
            product_type: self.first("product_type").map(str::to_string),
            shade: self.first("shade").map(str::to_string),
            tooth_numbers: self.parse_tooth_numbers()?,
            priority: self.parse_optional("priority")?,
            status: self.parse_optional("status")?,
            order_date: self.parse_datetime_optional("order_date")?,
            expected_delivery: self.parse_datetime_optional("expected_delivery")?,
            design_notes: self.first("design_notes").map(str::to_string),
            comment: self.first("comment").map(str::to_string),
            existing_image_3d_urls: self.parse_existing_urls()?,
        })
    }
}

fn invalid_tooth_numbers() -> Error {
    Error::ValidationError("tooth_numbers must be integers".to_string())
}

fn parse_enum<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

/// Accepts RFC 3339 timestamps or bare naive timestamps.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_utc());
    }

    raw.parse::<NaiveDateTime>().ok()
}
