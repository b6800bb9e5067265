use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{create_appointment_router, AppointmentBook, AppointmentCellState};
use queue_cell::{create_queue_router, QueueService};
use shared_config::AppConfig;

pub fn create_router(config: &AppConfig) -> Router {
    // One store per process; the appointment cell shares the queue handle
    // so scheduled visits can be checked in.
    let queue = Arc::new(QueueService::new(config));
    let appointments = Arc::new(AppointmentCellState {
        book: AppointmentBook::new(config),
        queue: queue.clone(),
    });

    Router::new()
        .route("/", get(|| async { "MedFlow Queue Manager API is running!" }))
        .nest("/api/queue", create_queue_router(queue))
        .nest("/api/appointments", create_appointment_router(appointments))
}
