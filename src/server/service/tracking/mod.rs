//! Shipment tracking lookups against the carrier API.

pub mod mapper;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::tracking::TrackingView,
    server::{
        carrier::CarrierClient,
        data::order::AcceptedOrderRepository,
        error::{tracking::TrackingError, Error},
        service::tracking::mapper::map_tracking_response,
    },
};

pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
    carrier: &'a CarrierClient,
}

impl<'a> TrackingService<'a> {
    /// Creates a new instance of [`TrackingService`]
    pub fn new(db: &'a DatabaseConnection, carrier: &'a CarrierClient) -> Self {
        Self { db, carrier }
    }

    /// Fetches live tracking for an accepted order.
    ///
    /// The carrier is only contacted once an accepted order with an assigned
    /// tracking number is found. Each call performs a fresh token exchange.
    pub async fn get_tracking_by_order_id(&self, order_id: Uuid) -> Result<TrackingView, Error> {
        let (tracking_no, _shipment_provider) = AcceptedOrderRepository::new(self.db)
            .find_shipment_info(order_id)
            .await?
            .ok_or(TrackingError::OrderNotFound)?;

        let tracking_no = tracking_no.ok_or(TrackingError::TrackingNotAvailable)?;

        let response = self.carrier.track(&tracking_no).await?;

        map_tracking_response(&response, Utc::now())
            .ok_or_else(|| TrackingError::TrackingNotAvailable.into())
    }
}
