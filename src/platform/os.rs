use std::fmt;

/// Host platform family, detected once per monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Darwin,
    Linux,
    Windows,
    Other(&'static str),
}

impl OsFamily {
    /// Detect the family this binary runs on.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a family.
    pub fn from_os_name(name: &'static str) -> Self {
        match name {
            "macos" | "darwin" => OsFamily::Darwin,
            "linux" => OsFamily::Linux,
            "windows" => OsFamily::Windows,
            other => OsFamily::Other(other),
        }
    }

    pub fn is_darwin(&self) -> bool {
        matches!(self, OsFamily::Darwin)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Darwin => f.write_str("Darwin"),
            OsFamily::Linux => f.write_str("Linux"),
            OsFamily::Windows => f.write_str("Windows"),
            OsFamily::Other(name) => f.write_str(name),
        }
    }
}

/// Human-readable OS description for the banner and logs
pub fn describe_host() -> String {
    let name = sysinfo::System::name().unwrap_or_else(|| "Unknown".to_string());
    match sysinfo::System::os_version() {
        Some(version) => format!("{} {}", name, version),
        None => name,
    }
}
