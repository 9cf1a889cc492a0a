use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::not_found;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Order not found")]
    OrderNotFound,
    /// The accepted order exists but no tracking number was assigned yet.
    /// The carrier is never contacted in this case.
    #[error("Tracking number not available")]
    TrackingNotAvailable,
}

impl IntoResponse for TrackingError {
    fn into_response(self) -> Response {
        match self {
            Self::OrderNotFound | Self::TrackingNotAvailable => not_found(self.to_string()),
        }
    }
}
