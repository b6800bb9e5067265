use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    cancel_appointment, check_in_from_appointment, complete_appointment, list_appointments,
    schedule_appointment, today_appointments, upcoming_appointments,
};
use crate::AppointmentCellState;

pub fn create_appointment_router(state: Arc<AppointmentCellState>) -> Router {
    Router::new()
        .route("/", get(list_appointments))
        .route("/schedule", post(schedule_appointment))
        .route("/today", get(today_appointments))
        .route("/upcoming", get(upcoming_appointments))
        .route("/{appointment_id}/complete", post(complete_appointment))
        .route("/{appointment_id}/cancel", post(cancel_appointment))
        .route("/{appointment_id}/check-in", post(check_in_from_appointment))
        .with_state(state)
}
