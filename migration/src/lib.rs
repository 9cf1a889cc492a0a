pub use sea_orm_migration::prelude::*;

mod m20260830_000001_product_list;
mod m20260830_000002_product_type;
mod m20260830_000003_practitioner;
mod m20260830_000004_patient;
mod m20260830_000005_address;
mod m20260830_000006_order_request;
mod m20260830_000007_accepted_order;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_product_list::Migration),
            Box::new(m20260830_000002_product_type::Migration),
            Box::new(m20260830_000003_practitioner::Migration),
            Box::new(m20260830_000004_patient::Migration),
            Box::new(m20260830_000005_address::Migration),
            Box::new(m20260830_000006_order_request::Migration),
            Box::new(m20260830_000007_accepted_order::Migration),
        ]
    }
}
