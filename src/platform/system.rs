//! Platform-neutral queries shared by every metric source.

use std::path::Path;
#[cfg(not(unix))]
use std::path::{Component, PathBuf, Prefix};
use std::process::Command;

use battery::units::ratio::percent;

use crate::core::metrics::DiskSpace;
use crate::error::{AssistError, Result};

/// Byte counts for the filesystem that holds `path`, read with `statvfs`
/// on the path itself.
///
/// Pseudo filesystems such as `/proc` report zero blocks, which the
/// monitor treats as absent.
#[cfg(unix)]
pub fn disk_space_for(path: &Path) -> Result<DiskSpace> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(path).map_err(|e| {
        AssistError::metric_collection(format!("statvfs failed for {:?}: {}", path, e))
    })?;

    let fragment = stats.fragment_size() as u64;
    let total = stats.blocks() as u64 * fragment;
    let available = stats.blocks_available() as u64 * fragment;

    log::debug!("{:?}: {} bytes total, {} available", path, total, available);
    Ok(DiskSpace::from_total_and_available(total, available))
}

/// Byte counts for the mounted volume that contains `path`.
///
/// The path is canonicalized first, so a missing path or a permission
/// problem surfaces as an error here.
#[cfg(not(unix))]
pub fn disk_space_for(path: &Path) -> Result<DiskSpace> {
    use sysinfo::Disks;

    let target = strip_verbatim(&path.canonicalize()?);
    let disks = Disks::new_with_refreshed_list();

    let mounts: Vec<(PathBuf, u64, u64)> = disks
        .list()
        .iter()
        .map(|disk| {
            (
                disk.mount_point().to_path_buf(),
                disk.total_space(),
                disk.available_space(),
            )
        })
        .collect();

    let (mount, total, available) = best_mount(&target, &mounts).ok_or_else(|| {
        AssistError::metric_collection(format!("No mounted volume contains {:?}", target))
    })?;

    log::debug!("{:?} resolved to mount point {:?}", target, mount);
    Ok(DiskSpace::from_total_and_available(*total, *available))
}

/// Rewrite `\\?\C:\x` as `C:\x` so it compares equal to mount points.
#[cfg(not(unix))]
fn strip_verbatim(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Prefix(prefix)) => match prefix.kind() {
            Prefix::VerbatimDisk(letter) => {
                let mut plain = PathBuf::from(format!("{}:", letter as char));
                plain.extend(components);
                plain
            }
            _ => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Pick the mount point with the longest prefix of `target`.
#[cfg(not(unix))]
fn best_mount<'a>(
    target: &Path,
    mounts: &'a [(PathBuf, u64, u64)],
) -> Option<&'a (PathBuf, u64, u64)> {
    mounts
        .iter()
        .filter(|(mount, _, _)| target.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.components().count())
}

/// Charge of the first battery the OS exposes, in percent.
pub fn first_battery_charge() -> Result<Option<f32>> {
    let manager = battery::Manager::new()
        .map_err(|e| AssistError::metric_collection(format!("Battery API unavailable: {}", e)))?;
    let mut batteries = manager
        .batteries()
        .map_err(|e| AssistError::metric_collection(format!("Failed to list batteries: {}", e)))?;

    match batteries.next() {
        Some(Ok(battery)) => Ok(Some(battery.state_of_charge().get::<percent>())),
        Some(Err(e)) => Err(AssistError::metric_collection(format!(
            "Failed to read battery: {}",
            e
        ))),
        None => Ok(None),
    }
}

/// Run a command and return its stdout. A non-zero exit is an error.
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if !output.status.success() {
        return Err(AssistError::metric_collection(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
