//! Platform-specific metric sources.
//!
//! Provides one [`MetricSource`] per supported OS family.
//! Darwin gets `pmset`/`top`; everything else uses only the
//! platform-neutral disk and battery APIs.

mod darwin;
mod generic;
pub mod os;
pub mod system;

pub use darwin::DarwinSource;
pub use generic::GenericSource;
pub use os::{describe_host, OsFamily};

use crate::core::source::MetricSource;

/// Select the metric source for an OS family
pub fn source_for(os: OsFamily) -> Box<dyn MetricSource> {
    match os {
        OsFamily::Darwin => Box::new(DarwinSource),
        other => Box::new(GenericSource::new(other)),
    }
}
