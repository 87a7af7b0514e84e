//! Fixed-template sentences for each metric reading.

use super::metrics::{Absence, BatteryLevel, DiskUsage, Reading};
use crate::platform::OsFamily;

pub const DISK_UNAVAILABLE: &str = "I was unable to retrieve the disk usage information.";
pub const BATTERY_UNAVAILABLE: &str = "I could not retrieve the current battery status. It might be unavailable or not applicable (e.g., on a desktop).";
pub const MEMORY_DARWIN_ONLY: &str = "Memory usage from 'top' command is only available on macOS.";
pub const MEMORY_UNAVAILABLE: &str = "I was unable to fetch the system's current memory usage.";
pub const NO_REPORTS: &str = "No Reports Found!";

pub fn disk_report(reading: &Reading<DiskUsage>) -> String {
    match reading {
        Reading::Present(usage) => format!(
            "Here is the current disk usage report: The total disk space is {} GB, \
             with {} GB used and {} GB free. \
             This means the disk is currently {}% full.",
            format_decimal(usage.total_gb),
            format_decimal(usage.used_gb),
            format_decimal(usage.free_gb),
            format_decimal(usage.percent_used),
        ),
        Reading::Absent(_) => DISK_UNAVAILABLE.to_string(),
    }
}

pub fn battery_report(reading: &Reading<BatteryLevel>) -> String {
    match reading {
        Reading::Present(level) => format!("The current battery level is at {}%.", level),
        Reading::Absent(_) => BATTERY_UNAVAILABLE.to_string(),
    }
}

pub fn memory_report(reading: &Reading<String>, os: OsFamily) -> String {
    match reading {
        Reading::Present(summary) => {
            // The summary usually ends its own sentence already
            let terminator = if summary.ends_with('.') { "" } else { "." };
            format!(
                "The system's physical memory (RAM) usage is currently: {}{}",
                summary, terminator
            )
        }
        Reading::Absent(Absence::Unsupported) => MEMORY_DARWIN_ONLY.to_string(),
        Reading::Absent(_) if !os.is_darwin() => MEMORY_DARWIN_ONLY.to_string(),
        Reading::Absent(_) => MEMORY_UNAVAILABLE.to_string(),
    }
}

/// Render a stored decimal value: shortest round-trip form, always with a
/// fractional part (`500.0`, `123.45`).
pub fn format_decimal(value: f64) -> String {
    let text = format!("{}", value);
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
