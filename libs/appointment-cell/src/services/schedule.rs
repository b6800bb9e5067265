use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::{
    Appointment, AppointmentError, AppointmentStatus, ScheduleAppointmentRequest,
    TodaysAppointments, UpcomingAppointments,
};
use shared_config::AppConfig;

/// The appointment book. Records are appended on scheduling and only ever
/// change status afterwards; completing or cancelling twice, or in either
/// order, just overwrites the status (no transition guard).
pub struct AppointmentBook {
    inner: RwLock<Vec<Appointment>>,
    upcoming_limit: usize,
}

impl AppointmentBook {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            upcoming_limit: config.upcoming_display_limit,
        }
    }

    /// Book a new appointment. Patient name and phone must be non-empty
    /// after trimming; a failed check creates nothing. Past dates are a
    /// client-side concern and are accepted here.
    pub async fn schedule(
        &self,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let patient_name = request.patient_name.trim();
        if patient_name.is_empty() {
            return Err(AppointmentError::Validation(
                "patient_name must not be empty".to_string(),
            ));
        }
        let phone = request.phone.trim();
        if phone.is_empty() {
            return Err(AppointmentError::Validation(
                "phone must not be empty".to_string(),
            ));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: patient_name.to_string(),
            phone: phone.to_string(),
            appointment_type: request.appointment_type,
            date: request.date,
            time: request.time,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        };
        self.inner.write().await.push(appointment.clone());

        info!(
            "Appointment {} scheduled for {} at {} on {}",
            appointment.id, appointment.patient_name, appointment.time, appointment.date
        );
        Ok(appointment)
    }

    /// Mark the identified appointment completed, regardless of its
    /// current status. Unknown ids are a no-op returning `None`.
    pub async fn complete(&self, appointment_id: Uuid) -> Option<Appointment> {
        self.set_status(appointment_id, AppointmentStatus::Completed).await
    }

    /// Mark the identified appointment cancelled, regardless of its
    /// current status. Unknown ids are a no-op returning `None`.
    pub async fn cancel(&self, appointment_id: Uuid) -> Option<Appointment> {
        self.set_status(appointment_id, AppointmentStatus::Cancelled).await
    }

    pub async fn get(&self, appointment_id: Uuid) -> Option<Appointment> {
        self.inner
            .read()
            .await
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
    }

    pub async fn all(&self) -> Vec<Appointment> {
        self.inner.read().await.clone()
    }

    /// Appointments on the given calendar day, in booking order.
    pub async fn today(&self, today: NaiveDate) -> TodaysAppointments {
        let appointments: Vec<Appointment> = self
            .inner
            .read()
            .await
            .iter()
            .filter(|a| a.date == today)
            .cloned()
            .collect();
        let scheduled_count = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count();

        TodaysAppointments {
            appointments,
            scheduled_count,
        }
    }

    /// Appointments strictly after the given day, sorted by date and time,
    /// truncated to the configured display limit with an overflow count.
    pub async fn upcoming(&self, today: NaiveDate) -> UpcomingAppointments {
        let mut upcoming: Vec<Appointment> = self
            .inner
            .read()
            .await
            .iter()
            .filter(|a| a.date > today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|a| (a.date, a.time));

        let scheduled_count = upcoming
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count();
        let overflow = upcoming.len().saturating_sub(self.upcoming_limit);
        upcoming.truncate(self.upcoming_limit);

        UpcomingAppointments {
            appointments: upcoming,
            overflow,
            scheduled_count,
        }
    }

    async fn set_status(
        &self,
        appointment_id: Uuid,
        status: AppointmentStatus,
    ) -> Option<Appointment> {
        let mut inner = self.inner.write().await;
        let appointment = inner.iter_mut().find(|a| a.id == appointment_id)?;
        appointment.status = status;

        info!("Appointment {} marked {}", appointment.id, appointment.status);
        Some(appointment.clone())
    }
}
