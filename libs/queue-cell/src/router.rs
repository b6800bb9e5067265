use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    call_next, check_in, complete_patient, list_patients, queue_display, staff_overview,
};
use crate::QueueService;

pub fn create_queue_router(service: Arc<QueueService>) -> Router {
    Router::new()
        .route("/check-in", post(check_in))
        .route("/call-next", post(call_next))
        .route("/patients", get(list_patients))
        .route("/patients/{patient_id}/complete", post(complete_patient))
        .route("/display", get(queue_display))
        .route("/staff", get(staff_overview))
        .with_state(service)
}
