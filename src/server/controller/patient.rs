use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        patient::{CreatePatientInput, PatientDto, UpdatePatientInput},
    },
    server::{error::Error, model::app::AppState, service::patient::PatientService},
};

pub static PATIENT_TAG: &str = "patient";

#[derive(Deserialize, IntoParams)]
pub struct PatientListQuery {
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
}

/// Create a patient
#[utoipa::path(
    post,
    path = "/api/patients",
    tag = PATIENT_TAG,
    request_body = CreatePatientInput,
    responses(
        (status = 201, description = "Patient created", body = ApiResponse<PatientDto>),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(input): Json<CreatePatientInput>,
) -> Result<impl IntoResponse, Error> {
    let patient = PatientService::new(&state.db).create_patient(input).await?;

    Ok(Json(ApiResponse::created(patient)))
}

/// List patients, optionally scoped to a tenant
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = PATIENT_TAG,
    params(PatientListQuery),
    responses(
        (status = 200, description = "Patients", body = ApiResponse<Vec<PatientDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientListQuery>,
) -> Result<impl IntoResponse, Error> {
    let patients = PatientService::new(&state.db)
        .list_patients(query.tenant_id)
        .await?;

    Ok(Json(ApiResponse::ok(patients)))
}

/// Get a patient with their addresses
#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient found", body = ApiResponse<PatientDto>),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let patient = PatientService::new(&state.db).get_patient(id).await?;

    Ok(Json(ApiResponse::ok(patient)))
}

/// Partially update a patient
#[utoipa::path(
    patch,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    request_body = UpdatePatientInput,
    responses(
        (status = 200, description = "Patient updated", body = ApiResponse<PatientDto>),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdatePatientInput>,
) -> Result<impl IntoResponse, Error> {
    let patient = PatientService::new(&state.db)
        .update_patient(id, input)
        .await?;

    Ok(Json(ApiResponse::ok(patient)))
}

/// Delete a patient and their addresses
#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    PatientService::new(&state.db).delete_patient(id).await?;

    Ok(Json(ApiResponse::message("Patient deleted successfully")))
}
