use std::path::Path;

use super::system::{disk_space_for, first_battery_charge, run_command};
use crate::core::metrics::DiskSpace;
use crate::core::source::MetricSource;
use crate::error::Result;

/// Metric source for macOS hosts: `pmset` and `top` are available.
#[derive(Debug, Default)]
pub struct DarwinSource;

impl MetricSource for DarwinSource {
    fn name(&self) -> &'static str {
        "darwin"
    }

    fn disk_space(&self, path: &Path) -> Result<DiskSpace> {
        disk_space_for(path)
    }

    fn battery_charge(&self) -> Result<Option<f32>> {
        first_battery_charge()
    }

    fn power_status(&self) -> Result<String> {
        run_command("pmset", &["-g", "batt"])
    }

    fn memory_status(&self) -> Result<String> {
        // One sample, no process rows
        run_command("top", &["-l", "1", "-n", "0"])
    }
}
