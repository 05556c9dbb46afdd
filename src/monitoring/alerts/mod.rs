//! Alert management system
//!
//! Alerts are logged locally and forwarded, best effort, to a webhook.

mod channels;
mod manager;
mod types;

// Re-export public types
pub use channels::{NotificationChannel, WebhookChannel};
pub use manager::AlertManager;
pub use types::{Alert, AlertSeverity, AlertStats};
