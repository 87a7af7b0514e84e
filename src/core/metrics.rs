//! Metric kinds and the values the probes produce.

use std::fmt;
use std::str::FromStr;

/// The system-resource categories the assistant can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Disk,
    Battery,
    Memory,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Disk, MetricKind::Battery, MetricKind::Memory];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Disk => "disk",
            MetricKind::Battery => "battery",
            MetricKind::Memory => "memory",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of the recognized metric kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disk" => Ok(MetricKind::Disk),
            "battery" => Ok(MetricKind::Battery),
            "memory" => Ok(MetricKind::Memory),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// Raw byte counts for the filesystem containing the monitored path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiskSpace {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

impl DiskSpace {
    /// Build from total and available bytes, deriving `used` so that
    /// `used + free == total` always holds.
    pub fn from_total_and_available(total: u64, available: u64) -> Self {
        let free = available.min(total);
        Self {
            total_bytes: total,
            used_bytes: total - free,
            free_bytes: free,
        }
    }
}

/// Disk usage in decimal gigabytes (1 GB = 1e9 bytes), two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskUsage {
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percent_used: f64,
}

const BYTES_PER_GB: f64 = 1e9;

impl DiskUsage {
    /// Convert raw byte counts. Returns `None` for a zero-sized filesystem.
    pub fn from_space(space: DiskSpace) -> Option<Self> {
        if space.total_bytes == 0 {
            return None;
        }

        let percent = space.used_bytes as f64 / space.total_bytes as f64 * 100.0;

        Some(Self {
            total_gb: round_to(space.total_bytes as f64 / BYTES_PER_GB, 2),
            used_gb: round_to(space.used_bytes as f64 / BYTES_PER_GB, 2),
            free_gb: round_to(space.free_bytes as f64 / BYTES_PER_GB, 2),
            percent_used: round_to(percent, 1),
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Battery charge as a whole percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Accepts only values in `[0, 100]`.
    pub fn new(percent: u32) -> Option<Self> {
        u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .map(BatteryLevel)
    }

    /// Truncates a fractional charge toward zero and clamps it into range.
    pub fn from_fraction(percent: f32) -> Option<Self> {
        if !percent.is_finite() {
            return None;
        }
        Some(BatteryLevel(percent.clamp(0.0, 100.0).trunc() as u8))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a metric could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    /// The host platform has no way to provide this metric
    Unsupported,
    /// The query worked but there was nothing to report (e.g. no battery)
    NoHardware,
    /// An OS call or command failed
    QueryFailed(String),
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::Unsupported => f.write_str("not supported on this platform"),
            Absence::NoHardware => f.write_str("no data available"),
            Absence::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// Outcome of a single probe: a value, or an explicit absence.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<T> {
    Present(T),
    Absent(Absence),
}

impl<T> Reading<T> {
    pub fn failed<S: Into<String>>(msg: S) -> Self {
        Reading::Absent(Absence::QueryFailed(msg.into()))
    }
}
