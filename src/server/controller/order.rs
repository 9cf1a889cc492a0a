use axum::{
    extract::{Multipart, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageMeta},
        order::{
            AcceptedOrderDto, OrderDto, ProductListDto, ProductTypeDto, UpdateShipmentInput,
        },
    },
    server::{
        error::{order::OrderError, Error},
        model::app::AppState,
        service::order::{accepted_order_dto, OrderService},
        util::multipart::OrderForm,
    },
};

pub static ORDER_TAG: &str = "order";

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PAGE_LIMIT: u64 = 10;

#[derive(Deserialize, IntoParams)]
pub struct ProductTypeQuery {
    #[serde(rename = "listName")]
    pub list_name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct ProductImageQuery {
    #[serde(rename = "listName")]
    pub list_name: String,
    #[serde(rename = "typeName")]
    pub type_name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Create an order request from a multipart submission
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderDto>),
        (status = 400, description = "Invalid submission or product type without catalog image", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db, &state.storage);

    let form = OrderForm::read(&mut multipart).await?;
    let input = form.create_input()?;

    let order = order_service
        .create_order(input, form.attachments)
        .await?;

    let dto = order_service
        .get_order_by_id(order.order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order.order_id))?;

    Ok(Json(ApiResponse::created(dto)))
}

/// Partially update an order request
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order request ID")),
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderDto>),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db, &state.storage);

    let form = OrderForm::read(&mut multipart).await?;
    let input = form.update_input()?;

    let order = order_service
        .update_order(order_id, input, form.attachments)
        .await?;

    let dto = order_service
        .get_order_by_id(order.order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order.order_id))?;

    Ok(Json(ApiResponse::ok(dto)))
}

/// Get an order request with presigned attachment URLs
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order request ID")),
    responses(
        (status = 200, description = "Order found", body = ApiResponse<OrderDto>),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let dto = OrderService::new(&state.db, &state.storage)
        .get_order_by_id(order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order_id))?;

    Ok(Json(ApiResponse::ok(dto)))
}

/// Get one page of a patient's orders
#[utoipa::path(
    get,
    path = "/api/orders/patient/{patient_id}",
    tag = ORDER_TAG,
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Orders for the patient", body = ApiResponse<Vec<OrderDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders_by_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

    let (orders, total) = OrderService::new(&state.db, &state.storage)
        .orders_by_patient(patient_id, page, limit)
        .await?;

    Ok(Json(ApiResponse::with_meta(
        orders,
        PageMeta::new(total, page, limit),
    )))
}

/// Get the accepted projection of an order
#[utoipa::path(
    get,
    path = "/api/orders/accepted/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order request ID")),
    responses(
        (status = 200, description = "Accepted order found", body = ApiResponse<AcceptedOrderDto>),
        (status = 404, description = "Accepted order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accepted_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let dto = OrderService::new(&state.db, &state.storage)
        .get_accepted_order(order_id)
        .await?;

    Ok(Json(ApiResponse::ok(dto)))
}

/// Patch shipment fields onto an accepted order
#[utoipa::path(
    patch,
    path = "/api/orders/accepted/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order request ID")),
    request_body = UpdateShipmentInput,
    responses(
        (status = 200, description = "Shipment details updated", body = ApiResponse<AcceptedOrderDto>),
        (status = 404, description = "Accepted order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_accepted_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(input): Json<UpdateShipmentInput>,
) -> Result<impl IntoResponse, Error> {
    let accepted = OrderService::new(&state.db, &state.storage)
        .update_accepted_order(order_id, input)
        .await?;

    Ok(Json(ApiResponse::ok(accepted_order_dto(accepted))))
}

/// List all product lists
#[utoipa::path(
    get,
    path = "/api/orders/product-list",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Product lists", body = ApiResponse<Vec<ProductListDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_lists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let lists = OrderService::new(&state.db, &state.storage)
        .product_lists()
        .await?;

    Ok(Json(ApiResponse::ok(lists)))
}

/// List product types of a named list
#[utoipa::path(
    get,
    path = "/api/orders/product-type",
    tag = ORDER_TAG,
    params(ProductTypeQuery),
    responses(
        (status = 200, description = "Product types", body = ApiResponse<Vec<ProductTypeDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_types(
    State(state): State<AppState>,
    Query(query): Query<ProductTypeQuery>,
) -> Result<impl IntoResponse, Error> {
    let types = OrderService::new(&state.db, &state.storage)
        .product_types(&query.list_name)
        .await?;

    Ok(Json(ApiResponse::ok(types)))
}

/// Get a product type's catalog image as base64, null when absent
#[utoipa::path(
    get,
    path = "/api/orders/product-image",
    tag = ORDER_TAG,
    params(ProductImageQuery),
    responses(
        (status = 200, description = "Catalog image, base64-encoded or null", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_image(
    State(state): State<AppState>,
    Query(query): Query<ProductImageQuery>,
) -> Result<impl IntoResponse, Error> {
    let image = OrderService::new(&state.db, &state.storage)
        .product_image(&query.list_name, &query.type_name)
        .await?;

    Ok(Json(ApiResponse::ok_nullable(image)))
}
