//! Repositories wrapping database access for each aggregate.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the pooled connection or inside a transaction.

pub mod address;
pub mod order;
pub mod patient;
pub mod practitioner;
pub mod product;
