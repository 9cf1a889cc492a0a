use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDto, server::error::not_found};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("User with email {0} already exists")]
    UserEmailExists(String),
    #[error("Patient with email {0} already exists")]
    PatientEmailExists(String),
    #[error("User with ID {0} not found")]
    UserNotFound(Uuid),
    #[error("Patient with ID {0} not found")]
    PatientNotFound(Uuid),
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match self {
            Self::UserEmailExists(_) | Self::PatientEmailExists(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new(
                    StatusCode::CONFLICT.as_u16(),
                    self.to_string(),
                )),
            )
                .into_response(),
            Self::UserNotFound(_) | Self::PatientNotFound(_) => not_found(self.to_string()),
        }
    }
}
