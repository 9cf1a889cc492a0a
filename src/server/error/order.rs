use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::{bad_request, not_found};

#[derive(Error, Debug)]
pub enum OrderError {
    /// The chosen product type is unknown or carries no catalog image.
    /// Raised before any persistence happens.
    #[error("Image not found for product type: {0}")]
    MissingProductImage(String),
    #[error("Order request not found with ID {0}")]
    OrderNotFound(Uuid),
    #[error("Order not found for order ID {0}")]
    AcceptedOrderNotFound(Uuid),
    #[error("At most {limit} 3D attachments are allowed per order, got {count}")]
    TooManyAttachments { limit: usize, count: usize },
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingProductImage(_) => bad_request(self.to_string()),
            Self::OrderNotFound(_) | Self::AcceptedOrderNotFound(_) => not_found(self.to_string()),
            Self::TooManyAttachments { .. } => bad_request(self.to_string()),
        }
    }
}
