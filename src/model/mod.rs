pub mod address;
pub mod api;
pub mod order;
pub mod patient;
pub mod tracking;
pub mod user;
