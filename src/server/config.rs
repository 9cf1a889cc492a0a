pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub storage_driver: String,
    pub s3_bucket_name: String,
    pub fedex_base_url: String,
    pub fedex_client_id: String,
    pub fedex_client_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")?,
            storage_driver: std::env::var("STORAGE_DRIVER").unwrap_or_else(|_| "s3".to_string()),
            s3_bucket_name: std::env::var("S3_BUCKET_NAME")
                .unwrap_or_else(|_| "dentiq-3d-image-bucket".to_string()),
            fedex_base_url: std::env::var("FEDEX_BASE_URL")?,
            fedex_client_id: std::env::var("FEDEX_CLIENT_ID")?,
            fedex_client_secret: std::env::var("FEDEX_CLIENT_SECRET")?,
        })
    }
}
