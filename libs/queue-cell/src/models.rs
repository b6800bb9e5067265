use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use shared_models::AppointmentType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub appointment_type: AppointmentType,
    pub status: PatientStatus,
    pub check_in_time: DateTime<Utc>,
    pub queue_number: u32,
    pub appointment_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    Waiting,
    InProgress,
    Completed,
}

impl PatientStatus {
    /// Completed patients never re-enter the queue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PatientStatus::Completed)
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientStatus::Waiting => write!(f, "waiting"),
            PatientStatus::InProgress => write!(f, "in_progress"),
            PatientStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub name: String,
    pub phone: String,
    pub appointment_type: AppointmentType,
    pub appointment_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueStats {
    pub total_patients: usize,
    pub waiting: usize,
    pub in_progress: usize,
    pub completed_today: usize,
}

/// Projection backing the public waiting-room display: the patient being
/// served, everyone still waiting in arrival order, and the day's totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueDisplay {
    pub now_serving: Option<Patient>,
    pub waiting: Vec<Patient>,
    pub stats: QueueStats,
}

/// Projection backing the staff panel: all in-progress patients plus a
/// short preview of the waiting line with an overflow count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffOverview {
    pub in_progress: Vec<Patient>,
    pub waiting_preview: Vec<Patient>,
    pub waiting_total: usize,
    pub more_waiting: usize,
    pub completed_today: usize,
}
