use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of visit types offered by the clinic. Emergency is a
/// label only; it carries no scheduling priority in the queue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    #[serde(alias = "general", alias = "general_consultation")]
    Consultation,

    #[serde(alias = "followup", alias = "follow-up")]
    FollowUp,

    #[serde(alias = "check_up", alias = "check-up")]
    Checkup,

    #[serde(alias = "urgent")]
    Emergency,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Consultation => write!(f, "consultation"),
            AppointmentType::FollowUp => write!(f, "follow_up"),
            AppointmentType::Checkup => write!(f, "checkup"),
            AppointmentType::Emergency => write!(f, "emergency"),
        }
    }
}
