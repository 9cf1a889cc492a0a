pub mod order;
pub mod patient;
pub mod product;
