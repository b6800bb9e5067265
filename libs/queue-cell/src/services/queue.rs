use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{CheckInRequest, Patient, PatientStatus, QueueDisplay, QueueError, QueueStats, StaffOverview};
use shared_config::{AppConfig, ServingPolicy};

// Queue numbers are display labels, kept 3-digit-styled for the board.
const FIRST_QUEUE_NUMBER: u32 = 100;

/// The live patient queue. Records are appended on check-in and only ever
/// change status afterwards; nothing is physically removed, so arrival
/// order doubles as FIFO order for `call_next`.
pub struct QueueService {
    inner: RwLock<QueueInner>,
    policy: ServingPolicy,
    staff_preview_limit: usize,
}

struct QueueInner {
    patients: Vec<Patient>,
    next_queue_number: u32,
}

impl QueueService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            inner: RwLock::new(QueueInner {
                patients: Vec::new(),
                next_queue_number: FIRST_QUEUE_NUMBER,
            }),
            policy: config.serving_policy,
            staff_preview_limit: config.staff_waiting_preview_limit,
        }
    }

    /// Admit a patient to the queue. Name and phone must be non-empty
    /// after trimming; a failed check creates nothing.
    pub async fn check_in(&self, request: CheckInRequest) -> Result<Patient, QueueError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(QueueError::Validation("name must not be empty".to_string()));
        }
        let phone = request.phone.trim();
        if phone.is_empty() {
            return Err(QueueError::Validation("phone must not be empty".to_string()));
        }

        let mut inner = self.inner.write().await;
        let patient = Patient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            appointment_type: request.appointment_type,
            status: PatientStatus::Waiting,
            check_in_time: Utc::now(),
            queue_number: inner.next_queue_number,
            appointment_time: request.appointment_time,
        };
        inner.next_queue_number += 1;
        inner.patients.push(patient.clone());

        info!(
            "Patient {} checked in as #{} ({})",
            patient.id, patient.queue_number, patient.appointment_type
        );
        Ok(patient)
    }

    /// Promote the oldest waiting patient to in-progress and return it.
    /// Returns `None` without touching state when nobody is waiting, or,
    /// under `ServingPolicy::SingleSlot`, when a patient is already being
    /// served.
    pub async fn call_next(&self) -> Option<Patient> {
        let mut inner = self.inner.write().await;

        if self.policy == ServingPolicy::SingleSlot
            && inner.patients.iter().any(|p| p.status == PatientStatus::InProgress)
        {
            debug!("call_next ignored: serving slot already occupied");
            return None;
        }

        let next = inner
            .patients
            .iter_mut()
            .find(|p| p.status == PatientStatus::Waiting)?;
        next.status = PatientStatus::InProgress;

        info!("Now serving #{} ({})", next.queue_number, next.name);
        Some(next.clone())
    }

    /// Mark the identified patient completed, from any current status.
    /// Unknown ids leave the queue untouched and return `None`.
    pub async fn complete(&self, patient_id: Uuid) -> Option<Patient> {
        let mut inner = self.inner.write().await;
        let patient = inner.patients.iter_mut().find(|p| p.id == patient_id)?;
        patient.status = PatientStatus::Completed;

        info!("Patient #{} completed", patient.queue_number);
        Some(patient.clone())
    }

    pub async fn all(&self) -> Vec<Patient> {
        self.inner.read().await.patients.clone()
    }

    pub async fn waiting(&self) -> Vec<Patient> {
        self.filter_status(PatientStatus::Waiting).await
    }

    pub async fn in_progress(&self) -> Vec<Patient> {
        self.filter_status(PatientStatus::InProgress).await
    }

    /// The single "now serving" slot: the first in-progress patient, if any.
    pub async fn now_serving(&self) -> Option<Patient> {
        self.inner
            .read()
            .await
            .patients
            .iter()
            .find(|p| p.status == PatientStatus::InProgress)
            .cloned()
    }

    pub async fn stats(&self) -> QueueStats {
        let inner = self.inner.read().await;
        Self::stats_of(&inner.patients)
    }

    pub async fn display(&self) -> QueueDisplay {
        let inner = self.inner.read().await;
        QueueDisplay {
            now_serving: inner
                .patients
                .iter()
                .find(|p| p.status == PatientStatus::InProgress)
                .cloned(),
            waiting: inner
                .patients
                .iter()
                .filter(|p| p.status == PatientStatus::Waiting)
                .cloned()
                .collect(),
            stats: Self::stats_of(&inner.patients),
        }
    }

    pub async fn staff_overview(&self) -> StaffOverview {
        let inner = self.inner.read().await;
        let waiting: Vec<&Patient> = inner
            .patients
            .iter()
            .filter(|p| p.status == PatientStatus::Waiting)
            .collect();
        let waiting_total = waiting.len();

        StaffOverview {
            in_progress: inner
                .patients
                .iter()
                .filter(|p| p.status == PatientStatus::InProgress)
                .cloned()
                .collect(),
            waiting_preview: waiting
                .iter()
                .take(self.staff_preview_limit)
                .map(|p| (*p).clone())
                .collect(),
            waiting_total,
            more_waiting: waiting_total.saturating_sub(self.staff_preview_limit),
            completed_today: inner
                .patients
                .iter()
                .filter(|p| p.status == PatientStatus::Completed)
                .count(),
        }
    }

    async fn filter_status(&self, status: PatientStatus) -> Vec<Patient> {
        self.inner
            .read()
            .await
            .patients
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    fn stats_of(patients: &[Patient]) -> QueueStats {
        QueueStats {
            total_patients: patients.len(),
            waiting: patients.iter().filter(|p| p.status == PatientStatus::Waiting).count(),
            in_progress: patients
                .iter()
                .filter(|p| p.status == PatientStatus::InProgress)
                .count(),
            completed_today: patients
                .iter()
                .filter(|p| p.status == PatientStatus::Completed)
                .count(),
        }
    }
}
