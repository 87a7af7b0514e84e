use std::path::Path;

use super::system::{disk_space_for, first_battery_charge};
use super::OsFamily;
use crate::core::metrics::DiskSpace;
use crate::core::source::MetricSource;
use crate::error::{AssistError, Result};

/// Metric source for every non-Darwin host.
///
/// Disk and battery go through the platform-neutral APIs; the Darwin
/// command-line tools are not assumed to exist.
#[derive(Debug)]
pub struct GenericSource {
    os: OsFamily,
}

impl GenericSource {
    pub fn new(os: OsFamily) -> Self {
        Self { os }
    }
}

impl MetricSource for GenericSource {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn disk_space(&self, path: &Path) -> Result<DiskSpace> {
        disk_space_for(path)
    }

    fn battery_charge(&self) -> Result<Option<f32>> {
        first_battery_charge()
    }

    fn power_status(&self) -> Result<String> {
        Err(AssistError::metric_collection(format!(
            "pmset is not available on {}",
            self.os
        )))
    }

    fn memory_status(&self) -> Result<String> {
        Err(AssistError::metric_collection(format!(
            "top memory summary is not available on {}",
            self.os
        )))
    }
}
