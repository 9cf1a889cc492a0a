//! Error types for the dentiq server application.
//!
//! Domain-specific error enums (orders, accounts, tracking) are aggregated
//! into a single [`Error`] type via `thiserror`'s `#[from]`. Every error
//! implements `IntoResponse` and surfaces as the API's response envelope;
//! anything without a specific client mapping becomes a logged 500 with a
//! generic message so internal detail never leaks.

pub mod account;
pub mod order;
pub mod tracking;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        carrier::CarrierError,
        error::{account::AccountError, order::OrderError, tracking::TrackingError},
        storage::StorageError,
    },
};

#[derive(Error, Debug)]
pub enum Error {
    /// Order workflow error (catalog image lookup, attachment limits, unknown orders).
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Patient/practitioner error (duplicate email, unknown id).
    #[error(transparent)]
    AccountError(#[from] AccountError),
    /// Shipment tracking error (unknown order, no tracking number yet).
    #[error(transparent)]
    TrackingError(#[from] TrackingError),
    /// Invalid client input (malformed identifiers, oversized fields).
    #[error("Validation failed: {0}")]
    ValidationError(String),
    /// Malformed multipart payload.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
    /// Blob store error (upload, presign, delete).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Carrier API error (token exchange, tracking request).
    #[error(transparent)]
    CarrierError(#[from] CarrierError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::OrderError(err) => err.into_response(),
            Self::AccountError(err) => err.into_response(),
            Self::TrackingError(err) => err.into_response(),
            Self::ValidationError(message) => bad_request(message),
            Self::MultipartError(err) => bad_request(err.to_string()),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a 400 response wrapped in the API envelope.
pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto::new(StatusCode::BAD_REQUEST.as_u16(), message)),
    )
        .into_response()
}

/// Builds a 404 response wrapped in the API envelope.
pub fn not_found(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::new(StatusCode::NOT_FOUND.as_u16(), message)),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so implementation details and credentials never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Internal server error",
            )),
        )
            .into_response()
    }
}
