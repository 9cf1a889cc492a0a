pub mod accepted;
pub mod request;

pub use accepted::AcceptedOrderRepository;
pub use request::OrderRequestRepository;
