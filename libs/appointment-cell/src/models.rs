use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use shared_models::AppointmentType;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub phone: String,
    pub appointment_type: AppointmentType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// No transition is defined out of completed or cancelled, though
    /// complete/cancel themselves stay unconditional (last write wins).
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub patient_name: String,
    pub phone: String,
    pub appointment_type: AppointmentType,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Appointments falling on the given calendar day, in booking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodaysAppointments {
    pub appointments: Vec<Appointment>,
    pub scheduled_count: usize,
}

/// Appointments on days after the given one, sorted chronologically and
/// truncated for display; `overflow` counts the entries cut off and
/// `scheduled_count` spans the whole upcoming set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingAppointments {
    pub appointments: Vec<Appointment>,
    pub overflow: usize,
    pub scheduled_count: usize,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    Validation(String),
}
