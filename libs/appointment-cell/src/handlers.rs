use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use queue_cell::{CheckInRequest, QueueError};
use shared_models::AppError;

use crate::{AppointmentCellState, AppointmentError, ScheduleAppointmentRequest};

/// Book a new appointment
pub async fn schedule_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Json(request): Json<ScheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.book.schedule(request).await.map_err(|e| match e {
        AppointmentError::Validation(msg) => AppError::ValidationError(msg),
    })?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

/// Mark an appointment as completed
pub async fn complete_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    match state.book.complete(appointment_id).await {
        Some(appointment) => Ok(Json(json!({
            "success": true,
            "appointment": appointment
        }))),
        None => Err(AppError::NotFound("Appointment not found".to_string())),
    }
}

/// Cancel an appointment
pub async fn cancel_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    match state.book.cancel(appointment_id).await {
        Some(appointment) => Ok(Json(json!({
            "success": true,
            "appointment": appointment
        }))),
        None => Err(AppError::NotFound("Appointment not found".to_string())),
    }
}

/// Check an appointment's patient into the live queue. The appointment
/// itself is left untouched; each call produces a fresh queue entry.
pub async fn check_in_from_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .book
        .get(appointment_id)
        .await
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    let patient = state
        .queue
        .check_in(CheckInRequest {
            name: appointment.patient_name.clone(),
            phone: appointment.phone.clone(),
            appointment_type: appointment.appointment_type,
            appointment_time: None,
        })
        .await
        .map_err(|e| match e {
            QueueError::Validation(msg) => AppError::ValidationError(msg),
        })?;

    info!(
        "Appointment {} checked into the queue as patient {}",
        appointment.id, patient.id
    );

    Ok(Json(json!({
        "success": true,
        "patient": patient,
        "appointment": appointment
    })))
}

/// List every appointment, in booking order
pub async fn list_appointments(
    State(state): State<Arc<AppointmentCellState>>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.book.all().await;
    Ok(Json(json!({
        "appointments": appointments
    })))
}

/// Appointments scheduled for the current calendar day
pub async fn today_appointments(
    State(state): State<Arc<AppointmentCellState>>,
) -> Result<Json<Value>, AppError> {
    let today = state.book.today(Utc::now().date_naive()).await;
    Ok(Json(json!(today)))
}

/// Upcoming appointments, capped for display
pub async fn upcoming_appointments(
    State(state): State<Arc<AppointmentCellState>>,
) -> Result<Json<Value>, AppError> {
    let upcoming = state.book.upcoming(Utc::now().date_naive()).await;
    Ok(Json(json!(upcoming)))
}
