use std::env;
use tracing::warn;

/// How the queue treats the "now serving" slot when the next patient is
/// called while someone is already in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingPolicy {
    /// One patient in progress at a time; calling next while the slot is
    /// occupied is a no-op.
    SingleSlot,
    /// Promote the oldest waiting patient regardless of who is already
    /// being served.
    Concurrent,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub serving_policy: ServingPolicy,
    pub upcoming_display_limit: usize,
    pub staff_waiting_preview_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("MEDFLOW_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("MEDFLOW_PORT not set or invalid, using 3000");
                    3000
                }),
            serving_policy: match env::var("MEDFLOW_CONCURRENT_SERVING").as_deref() {
                Ok("1") | Ok("true") => ServingPolicy::Concurrent,
                _ => ServingPolicy::SingleSlot,
            },
            upcoming_display_limit: env::var("MEDFLOW_UPCOMING_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("MEDFLOW_UPCOMING_LIMIT not set or invalid, using 5");
                    5
                }),
            staff_waiting_preview_limit: env::var("MEDFLOW_STAFF_PREVIEW_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            serving_policy: ServingPolicy::SingleSlot,
            upcoming_display_limit: 5,
            staff_waiting_preview_limit: 3,
        }
    }
}
