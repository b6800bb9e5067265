use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use shared_models::AppError;

use crate::{CheckInRequest, QueueError, QueueService};

/// Check a walk-in patient into the queue
pub async fn check_in(
    State(service): State<Arc<QueueService>>,
    Json(request): Json<CheckInRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = service.check_in(request).await.map_err(|e| match e {
        QueueError::Validation(msg) => AppError::ValidationError(msg),
    })?;

    Ok(Json(json!({
        "success": true,
        "patient": patient
    })))
}

/// Call the next waiting patient
pub async fn call_next(
    State(service): State<Arc<QueueService>>,
) -> Result<Json<Value>, AppError> {
    match service.call_next().await {
        Some(patient) => Ok(Json(json!({
            "success": true,
            "patient": patient
        }))),
        None => {
            info!("Call-next request with no promotable patient");
            Ok(Json(json!({
                "success": true,
                "patient": null,
                "message": "No patient to call"
            })))
        }
    }
}

/// Mark a patient's visit as completed
pub async fn complete_patient(
    State(service): State<Arc<QueueService>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    match service.complete(patient_id).await {
        Some(patient) => Ok(Json(json!({
            "success": true,
            "patient": patient
        }))),
        None => Err(AppError::NotFound("Patient not found".to_string())),
    }
}

/// List every queue record, in check-in order
pub async fn list_patients(
    State(service): State<Arc<QueueService>>,
) -> Result<Json<Value>, AppError> {
    let patients = service.all().await;
    Ok(Json(json!({
        "patients": patients
    })))
}

/// Waiting-room display projection
pub async fn queue_display(
    State(service): State<Arc<QueueService>>,
) -> Result<Json<Value>, AppError> {
    let display = service.display().await;
    Ok(Json(json!(display)))
}

/// Staff panel projection
pub async fn staff_overview(
    State(service): State<Arc<QueueService>>,
) -> Result<Json<Value>, AppError> {
    let overview = service.staff_overview().await;
    Ok(Json(json!(overview)))
}
