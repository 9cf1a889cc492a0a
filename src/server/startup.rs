use std::sync::Arc;

use aws_config::BehaviorVersion;
use sea_orm::DatabaseConnection;

use crate::server::{
    carrier::CarrierClient,
    config::Config,
    storage::{memory::MemoryStorage, s3::S3Storage, FileStorage},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> DatabaseConnection {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    db
}

/// Build the attachment store configured by `STORAGE_DRIVER`.
///
/// `s3` (the default) talks to AWS using the ambient credential chain;
/// `memory` keeps blobs in process for local development.
pub async fn build_storage(config: &Config) -> Arc<dyn FileStorage> {
    match config.storage_driver.as_str() {
        "memory" => Arc::new(MemoryStorage::new(config.s3_bucket_name.clone())),
        _ => {
            let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
            let client = aws_sdk_s3::Client::new(&aws_config);

            Arc::new(S3Storage::new(client, config.s3_bucket_name.clone()))
        }
    }
}

/// Build the carrier tracking client with the configured credentials
pub fn build_carrier_client(config: &Config) -> CarrierClient {
    CarrierClient::new(
        config.fedex_base_url.clone(),
        config.fedex_client_id.clone(),
        config.fedex_client_secret.clone(),
    )
}
