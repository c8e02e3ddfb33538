use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::ports::NotificationSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub success_timeout_secs: u64,
    pub error_timeout_secs: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_timeout_secs: 1,
            error_timeout_secs: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub last_error: Option<String>,
    pub last_success: Option<String>,
    pub expires_at: Option<Instant>,
}

impl ToastState {
    pub fn set_error_at(&mut self, msg: String, now: Instant, config: &ToastConfig) {
        self.last_error = Some(msg);
        self.last_success = None;
        self.expires_at = expiry(now, config.error_timeout_secs);
    }

    pub fn set_success_at(&mut self, msg: String, now: Instant, config: &ToastConfig) {
        self.last_success = Some(msg);
        self.last_error = None;
        self.expires_at = expiry(now, config.success_timeout_secs);
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.last_error = None;
        self.last_success = None;
        self.expires_at = None;
    }
}

// A timeout too large to represent never expires.
fn expiry(now: Instant, timeout_secs: u64) -> Option<Instant> {
    now.checked_add(Duration::from_secs(timeout_secs))
}

/// Notification sink keeping the latest toast for the UI to show.
#[derive(Debug, Default)]
pub struct ToastQueue {
    state: Mutex<ToastState>,
    config: ToastConfig,
}

impl ToastQueue {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            state: Mutex::new(ToastState::default()),
            config,
        }
    }

    pub fn snapshot(&self) -> ToastState {
        self.lock().clone()
    }

    pub fn clear_expired_at(&self, now: Instant) {
        self.lock().clear_expired_at(now);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ToastState> {
        // A poisoned toast is still a valid toast.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl NotificationSink for ToastQueue {
    fn success(&self, message: &str) {
        self.lock()
            .set_success_at(message.to_string(), Instant::now(), &self.config);
    }

    fn error(&self, message: &str) {
        self.lock()
            .set_error_at(message.to_string(), Instant::now(), &self.config);
    }
}
