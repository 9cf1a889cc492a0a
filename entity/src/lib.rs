pub mod accepted_order;
pub mod address;
pub mod enums;
pub mod order_request;
pub mod patient;
pub mod practitioner;
pub mod product_list;
pub mod product_type;

pub mod prelude {
    pub use super::accepted_order::Entity as AcceptedOrder;
    pub use super::address::Entity as Address;
    pub use super::order_request::Entity as OrderRequest;
    pub use super::patient::Entity as Patient;
    pub use super::practitioner::Entity as Practitioner;
    pub use super::product_list::Entity as ProductList;
    pub use super::product_type::Entity as ProductType;
}
