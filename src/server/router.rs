//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI serves the generated document at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Multipart order submissions carry up to four 3D scan files.
const MAX_BODY_SIZE: usize = 100 * 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`;
/// interactive documentation is served at `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/orders` / `GET|PATCH /api/orders/{order_id}` - Order requests
/// - `GET /api/orders/patient/{patient_id}` - Paginated patient orders
/// - `GET|PATCH /api/orders/accepted/{order_id}` - Accepted orders
/// - `GET /api/orders/product-list|product-type|product-image` - Catalog
/// - `GET /api/tracking` - Live shipment tracking
/// - `POST|GET /api/patients`, `GET|PATCH|DELETE /api/patients/{id}`
/// - `POST|GET /api/users`, `GET|PATCH|DELETE /api/users/{id}`
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Dentiq", description = "Dentiq API"), tags(
        (name = controller::order::ORDER_TAG, description = "Order and product catalog API routes"),
        (name = controller::tracking::TRACKING_TAG, description = "Shipment tracking API routes"),
        (name = controller::patient::PATIENT_TAG, description = "Patient API routes"),
        (name = controller::user::USER_TAG, description = "Practitioner API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::order::create_order))
        .routes(routes!(controller::order::get_product_lists))
        .routes(routes!(controller::order::get_product_types))
        .routes(routes!(controller::order::get_product_image))
        .routes(routes!(controller::order::get_orders_by_patient))
        .routes(routes!(
            controller::order::get_accepted_order,
            controller::order::update_accepted_order
        ))
        .routes(routes!(
            controller::order::get_order,
            controller::order::update_order
        ))
        .routes(routes!(controller::tracking::get_tracking))
        .routes(routes!(
            controller::patient::create_patient,
            controller::patient::get_patients
        ))
        .routes(routes!(
            controller::patient::get_patient,
            controller::patient::update_patient,
            controller::patient::delete_patient
        ))
        .routes(routes!(
            controller::user::create_user,
            controller::user::get_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    routes
}
