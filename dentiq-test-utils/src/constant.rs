//! Test configuration constants.
//!
//! Placeholder values used across integration tests; none of these are real
//! credentials.

/// Bucket name recorded on attachment metadata in tests.
pub static TEST_BUCKET: &str = "dentiq-test-bucket";

/// Mock carrier OAuth2 client ID for testing.
pub static TEST_CARRIER_CLIENT_ID: &str = "carrier_client_id";

/// Mock carrier OAuth2 client secret for testing.
pub static TEST_CARRIER_CLIENT_SECRET: &str = "carrier_client_secret";

/// Access token issued by the mock carrier token endpoint.
pub static TEST_CARRIER_ACCESS_TOKEN: &str = "test-access-token";
