//! Shared helpers for dentiq integration tests: in-memory database setup,
//! entity fixtures, and mock carrier endpoints.

pub mod carrier;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{test_setup_with_order_tables, test_setup_with_tables, TestError, TestSetup};
}
