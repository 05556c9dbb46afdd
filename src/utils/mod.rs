//! Utility modules for the health monitor
//!
//! - **error**: error type and result alias
//! - **logging**: subscriber setup and log sanitization
//! - **shutdown**: process signal handling

pub mod error;
pub mod logging;
pub mod shutdown;

pub use error::{MonitorError, Result};
pub use logging::{init_logging, sanitize_url};
pub use shutdown::shutdown_signal;
