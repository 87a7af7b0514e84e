// Core business logic module

pub mod config;
pub mod metrics;
pub mod monitor;
pub mod probe;
pub mod report;
pub mod source;

// Re-export commonly used items
pub use config::Config;
pub use metrics::{Absence, BatteryLevel, DiskSpace, DiskUsage, MetricKind, Reading};
pub use monitor::SystemMonitor;
pub use source::MetricSource;
