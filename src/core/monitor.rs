//! Monitor facade: one report per metric kind.

use std::path::{Path, PathBuf};

use super::metrics::MetricKind;
use super::probe::{probe_battery, probe_disk, probe_memory};
use super::report::{battery_report, disk_report, memory_report, NO_REPORTS};
use super::source::MetricSource;
use crate::error::{AssistError, Result};
use crate::platform::{source_for, OsFamily};

/// Path monitored when none is configured
pub const DEFAULT_DISK_PATH: &str = "/";

/// Fetches and reports disk, battery and memory status.
///
/// The OS family and monitored path are fixed at construction. Every call
/// queries the OS afresh; nothing is cached between calls.
pub struct SystemMonitor {
    path: PathBuf,
    os: OsFamily,
    source: Box<dyn MetricSource>,
}

impl SystemMonitor {
    /// Monitor the filesystem root with the source for the host OS
    pub fn new() -> Self {
        let os = OsFamily::detect();
        Self::with_source(DEFAULT_DISK_PATH, os, source_for(os))
    }

    /// Monitor `path` with the source for the host OS.
    ///
    /// Malformed paths are rejected here. A well-formed path that does not
    /// exist is accepted and reported as unavailable at query time.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_monitored_path(path)?;

        let os = OsFamily::detect();
        Ok(Self::with_source(path, os, source_for(os)))
    }

    /// Build with an explicit OS family and metric source
    pub fn with_source<P: Into<PathBuf>>(path: P, os: OsFamily, source: Box<dyn MetricSource>) -> Self {
        let path = path.into();
        log::debug!(
            "SystemMonitor on {} using {} source for {:?}",
            os,
            source.name(),
            path
        );
        Self { path, os, source }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn os(&self) -> OsFamily {
        self.os
    }

    /// Report for a metric-kind token such as `"disk"`.
    ///
    /// Unknown tokens get the fixed "no reports" sentence.
    pub fn get_report(&self, kind: &str) -> String {
        match kind.parse::<MetricKind>() {
            Ok(kind) => self.report(kind),
            Err(e) => {
                log::debug!("{}", e);
                NO_REPORTS.to_string()
            }
        }
    }

    pub fn report(&self, kind: MetricKind) -> String {
        match kind {
            MetricKind::Disk => self.disk_report(),
            MetricKind::Battery => self.battery_report(),
            MetricKind::Memory => self.memory_report(),
        }
    }

    pub fn disk_report(&self) -> String {
        disk_report(&probe_disk(self.source.as_ref(), &self.path))
    }

    pub fn battery_report(&self) -> String {
        battery_report(&probe_battery(self.source.as_ref(), self.os))
    }

    pub fn memory_report(&self) -> String {
        memory_report(&probe_memory(self.source.as_ref(), self.os), self.os)
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject paths no OS call could ever accept
pub fn validate_monitored_path(path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.trim().is_empty() {
        return Err(AssistError::invalid_path("Monitored path cannot be empty"));
    }

    if text.contains('\0') {
        return Err(AssistError::invalid_path(format!(
            "Monitored path contains a NUL byte: {:?}",
            path
        )));
    }

    Ok(())
}
