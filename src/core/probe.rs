//! Metric probes.
//!
//! Each probe asks a [`MetricSource`] for raw data and turns the outcome into
//! a [`Reading`]. Probes never return errors: every failure becomes
//! `Reading::Absent` with the cause attached for logging.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::metrics::{Absence, BatteryLevel, DiskUsage, Reading};
use super::source::MetricSource;
use crate::platform::OsFamily;

/// Label that precedes the physical-memory summary in `top` output
pub const PHYSMEM_LABEL: &str = "PhysMem:";

static PERCENT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").expect("valid regex"));

/// Query usage statistics for the filesystem containing `path`.
pub fn probe_disk(source: &dyn MetricSource, path: &Path) -> Reading<DiskUsage> {
    match source.disk_space(path) {
        Ok(space) => match DiskUsage::from_space(space) {
            Some(usage) => Reading::Present(usage),
            None => {
                log::debug!("Filesystem for {:?} reports zero capacity", path);
                Reading::Absent(Absence::NoHardware)
            }
        },
        Err(e) => {
            log::debug!("Disk query for {:?} failed via {}: {}", path, source.name(), e);
            Reading::failed(e.to_string())
        }
    }
}

/// Read the battery level, falling back to `pmset` on Darwin hosts.
pub fn probe_battery(source: &dyn MetricSource, os: OsFamily) -> Reading<BatteryLevel> {
    let primary = match source.battery_charge() {
        Ok(Some(charge)) => match BatteryLevel::from_fraction(charge) {
            Some(level) => return Reading::Present(level),
            None => Absence::QueryFailed(format!("battery reported invalid charge {}", charge)),
        },
        Ok(None) => Absence::NoHardware,
        Err(e) => Absence::QueryFailed(e.to_string()),
    };

    log::debug!("Primary battery query returned nothing: {}", primary);

    if !os.is_darwin() {
        return Reading::Absent(primary);
    }

    match source.power_status() {
        Ok(output) => match parse_battery_percent(&output) {
            Some(level) => Reading::Present(level),
            None => {
                log::debug!("No battery percentage found in pmset output");
                Reading::Absent(primary)
            }
        },
        Err(e) => {
            log::debug!("pmset fallback failed: {}", e);
            Reading::failed(e.to_string())
        }
    }
}

/// Extract the first `<digits>%` token from power-management output.
///
/// When several percentages are present (a second battery, a UPS) the first
/// one wins.
pub fn parse_battery_percent(output: &str) -> Option<BatteryLevel> {
    let mut matches = PERCENT_TOKEN.captures_iter(output);
    let first = matches.next()?;

    if matches.next().is_some() {
        log::debug!("Power status lists several percentages; using the first");
    }

    let value: u32 = first.get(1)?.as_str().parse().ok()?;
    BatteryLevel::new(value)
}

/// Read the physical-memory summary. Only Darwin hosts provide one.
pub fn probe_memory(source: &dyn MetricSource, os: OsFamily) -> Reading<String> {
    if !os.is_darwin() {
        return Reading::Absent(Absence::Unsupported);
    }

    match source.memory_status() {
        Ok(output) => match extract_memory_summary(&output) {
            Some(summary) => Reading::Present(summary),
            None => {
                log::debug!("No {} line in memory summary output", PHYSMEM_LABEL);
                Reading::failed(format!("{} not found in output", PHYSMEM_LABEL))
            }
        },
        Err(e) => {
            log::debug!("Memory summary command failed: {}", e);
            Reading::failed(e.to_string())
        }
    }
}

/// Take the first line carrying the `PhysMem:` label, drop the label and trim.
pub fn extract_memory_summary(output: &str) -> Option<String> {
    let line = output.lines().find(|line| line.contains(PHYSMEM_LABEL))?;
    let summary = line.replacen(PHYSMEM_LABEL, "", 1).trim().to_string();

    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
