use std::path::Path;

use super::metrics::DiskSpace;
use crate::error::Result;

/// Trait for platform metric sources
///
/// Abstracts the raw OS access the probes need, so alternate OS backends can
/// be substituted without touching dispatch. Implementations live in the
/// platform layer; one is selected per OS family when the monitor is built.
pub trait MetricSource {
    /// Short backend name, used in log output
    fn name(&self) -> &'static str;

    /// Byte counts for the filesystem that contains `path`
    fn disk_space(&self, path: &Path) -> Result<DiskSpace>;

    /// Charge of the first battery as reported by the platform-neutral
    /// battery API, or `None` when the machine has no battery
    fn battery_charge(&self) -> Result<Option<f32>>;

    /// Output of the power-management command (`pmset -g batt`)
    fn power_status(&self) -> Result<String>;

    /// Output of the memory-summary command (`top -l 1`)
    fn memory_status(&self) -> Result<String>;
}
