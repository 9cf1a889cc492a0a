use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{carrier::CarrierClient, storage::FileStorage};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn FileStorage>,
    pub carrier: CarrierClient,
}
