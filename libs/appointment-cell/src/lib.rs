use std::sync::Arc;

pub mod models;
pub mod services;
pub mod handlers;
pub mod router;

pub use models::*;
pub use services::*;
pub use router::create_appointment_router;

use queue_cell::QueueService;

/// Shared state for the appointment routes: the appointment book itself
/// plus a handle to the queue cell so scheduled visits can be checked in.
pub struct AppointmentCellState {
    pub book: AppointmentBook,
    pub queue: Arc<QueueService>,
}
