mod create_order;
mod get_order;
mod promote;
mod update_order;

use std::sync::Arc;

use chrono::Utc;
use dentiq::{
    model::order::{CreateOrderInput, UploadFile},
    server::storage::{memory::MemoryStorage, FileStorage},
};
use dentiq_test_utils::constant::TEST_BUCKET;
use entity::enums::OrderPriority;
use uuid::Uuid;

/// In-memory blob store plus its trait-object handle for the service.
pub fn test_storage() -> (Arc<MemoryStorage>, Arc<dyn FileStorage>) {
    let memory = Arc::new(MemoryStorage::new(TEST_BUCKET));
    let storage: Arc<dyn FileStorage> = memory.clone();

    (memory, storage)
}

pub fn create_input(patient_id: Uuid) -> CreateOrderInput {
    let now = Utc::now().naive_utc();

    CreateOrderInput {
        patient_id,
        clinic_id: None,
        address_id: None,
        product_list: "Crowns".to_string(),
        product_type: "Zirconia Crown".to_string(),
        shade: Some("A2".to_string()),
        tooth_numbers: vec![11, 12],
        priority: OrderPriority::Medium,
        status: None,
        order_date: now,
        expected_delivery: now,
        design_notes: None,
        comment: None,
    }
}

pub fn upload_file(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "model/stl".to_string(),
        bytes: vec![1, 2, 3, 4],
    }
}
