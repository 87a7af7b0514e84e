use std::path::{Path, PathBuf};

use mac_assist::core::report::{
    BATTERY_UNAVAILABLE, DISK_UNAVAILABLE, MEMORY_DARWIN_ONLY, MEMORY_UNAVAILABLE, NO_REPORTS,
};
use mac_assist::core::{DiskSpace, SystemMonitor};
use mac_assist::platform::OsFamily;

use super::support::ScriptedSource;

fn monitor(os: OsFamily, source: ScriptedSource) -> SystemMonitor {
    SystemMonitor::with_source("/Volumes/Data", os, Box::new(source))
}

#[test]
fn test_disk_report_contains_exact_figures() {
    let cases = [
        (500_000_000_000u64, 300_000_000_000u64, "500.0", "200.0", "300.0", "40.0"),
        (1_000_000_000_000, 250_000_000_000, "1000.0", "750.0", "250.0", "75.0"),
        (245_107_195_904, 61_276_798_976, "245.11", "183.83", "61.28", "75.0"),
        (64_000_000_000, 64_000_000_000, "64.0", "0.0", "64.0", "0.0"),
    ];

    for (total, available, total_gb, used_gb, free_gb, percent) in cases {
        let source = ScriptedSource {
            disk: Some(DiskSpace::from_total_and_available(total, available)),
            ..Default::default()
        };
        let report = monitor(OsFamily::Linux, source).get_report("disk");

        assert_eq!(
            report,
            format!(
                "Here is the current disk usage report: The total disk space is {} GB, \
                 with {} GB used and {} GB free. \
                 This means the disk is currently {}% full.",
                total_gb, used_gb, free_gb, percent
            )
        );
    }
}

#[test]
fn test_disk_query_uses_configured_path() {
    let source = ScriptedSource {
        disk: Some(DiskSpace::from_total_and_available(10, 5)),
        ..Default::default()
    };
    let paths = source.disk_paths.clone();
    monitor(OsFamily::Darwin, source).get_report("disk");

    assert_eq!(*paths.borrow(), vec![PathBuf::from("/Volumes/Data")]);
}

#[test]
fn test_disk_failure_is_a_fixed_sentence() {
    for os in [OsFamily::Darwin, OsFamily::Linux, OsFamily::Windows] {
        assert_eq!(
            monitor(os, ScriptedSource::default()).get_report("disk"),
            DISK_UNAVAILABLE
        );
    }
}

#[test]
fn test_disk_report_on_real_missing_path() {
    let monitor = SystemMonitor::with_path("/this/path/should/not/exist/anywhere").unwrap();
    assert_eq!(monitor.get_report("disk"), DISK_UNAVAILABLE);
}

#[cfg(unix)]
#[test]
fn test_disk_report_on_real_temp_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let monitor = SystemMonitor::with_path(dir.path()).unwrap();
    let report = monitor.get_report("disk");

    assert!(
        report.starts_with("Here is the current disk usage report: The total disk space is "),
        "unexpected report: {}",
        report
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_disk_report_on_pseudo_filesystem_is_unavailable() {
    let monitor = SystemMonitor::with_path("/proc").unwrap();
    assert_eq!(monitor.get_report("disk"), DISK_UNAVAILABLE);
}

#[test]
fn test_battery_levels_have_no_rounding_artifacts() {
    for percent in 0..=100u8 {
        let source = ScriptedSource {
            battery: Some(percent as f32),
            ..Default::default()
        };
        assert_eq!(
            monitor(OsFamily::Windows, source).get_report("battery"),
            format!("The current battery level is at {}%.", percent)
        );
    }
}

#[test]
fn test_battery_fallback_only_on_darwin() {
    let pmset = "Now drawing from 'Battery Power'\n -InternalBattery-0 (id=7)\t55%; discharging;";

    let linux = ScriptedSource {
        pmset: Some(pmset.to_string()),
        ..Default::default()
    };
    let linux_commands = linux.commands_run.clone();
    assert_eq!(
        monitor(OsFamily::Linux, linux).get_report("battery"),
        BATTERY_UNAVAILABLE
    );
    assert!(linux_commands.borrow().is_empty());

    let darwin = ScriptedSource {
        pmset: Some(pmset.to_string()),
        ..Default::default()
    };
    let darwin_commands = darwin.commands_run.clone();
    assert_eq!(
        monitor(OsFamily::Darwin, darwin).get_report("battery"),
        "The current battery level is at 55%."
    );
    assert_eq!(*darwin_commands.borrow(), vec!["pmset"]);
}

#[test]
fn test_memory_report_on_darwin() {
    let source = ScriptedSource {
        top: Some(
            "Processes: 601 total, 3 running\nPhysMem: 12G used (4G wired), 4G unused.\n"
                .to_string(),
        ),
        ..Default::default()
    };

    assert_eq!(
        monitor(OsFamily::Darwin, source).get_report("memory"),
        "The system's physical memory (RAM) usage is currently: 12G used (4G wired), 4G unused."
    );
}

#[test]
fn test_memory_report_failure_on_darwin() {
    assert_eq!(
        monitor(OsFamily::Darwin, ScriptedSource::default()).get_report("memory"),
        MEMORY_UNAVAILABLE
    );

    let source = ScriptedSource {
        top: Some("Load Avg: 1.20, 1.31, 1.45\n".to_string()),
        ..Default::default()
    };
    assert_eq!(
        monitor(OsFamily::Darwin, source).get_report("memory"),
        MEMORY_UNAVAILABLE
    );
}

#[test]
fn test_memory_report_off_darwin_ignores_source() {
    for os in [OsFamily::Linux, OsFamily::Windows, OsFamily::Other("freebsd")] {
        let source = ScriptedSource {
            top: Some("PhysMem: 12G used (4G wired), 4G unused.".to_string()),
            ..Default::default()
        };
        let commands = source.commands_run.clone();

        assert_eq!(monitor(os, source).get_report("memory"), MEMORY_DARWIN_ONLY);
        assert!(commands.borrow().is_empty());
    }
}

#[test]
fn test_unknown_kinds() {
    let monitor = monitor(OsFamily::Darwin, ScriptedSource::default());
    for kind in ["unknown_kind", "cpu", "disks", "battery,", "Disk", " battery ", "MEMORY"] {
        assert_eq!(monitor.get_report(kind), NO_REPORTS);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let source = ScriptedSource {
        disk: Some(DiskSpace::from_total_and_available(994_662_584_320, 421_068_783_616)),
        battery: Some(73.2),
        top: Some("PhysMem: 30G used (3G wired), 2G unused.".to_string()),
        ..Default::default()
    };
    let monitor = monitor(OsFamily::Darwin, source);

    for kind in ["disk", "battery", "memory", "nope"] {
        let first = monitor.get_report(kind);
        let second = monitor.get_report(kind);
        assert_eq!(first, second);
    }
}

#[test]
fn test_monitor_exposes_construction_state() {
    let monitor = monitor(OsFamily::Darwin, ScriptedSource::default());
    assert_eq!(monitor.os(), OsFamily::Darwin);
    assert_eq!(monitor.path(), Path::new("/Volumes/Data"));
}
