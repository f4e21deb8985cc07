//! Docker reclaimable-space probe.
//!
//! Every failure degrades to "nothing reclaimable": a missing client, a
//! dead daemon, or malformed `system df` output must never abort a scan.

use crate::size;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How long `docker info` may take before the daemon counts as down.
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(1);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Locate the docker client executable on the search path.
pub fn client_path() -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join("docker"))
        .find(|candidate| candidate.is_file())
}

/// True if the docker daemon answers `docker info` within the timeout.
///
/// Timeouts, spawn failures, and non-zero exits all count as "not running".
pub fn engine_running() -> bool {
    if client_path().is_none() {
        return false;
    }

    let child = Command::new("docker")
        .arg("info")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(_) => return false,
    };

    let deadline = Instant::now() + LIVENESS_TIMEOUT;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return status.success(),
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return false;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                return false;
            }
        }
    }
}

/// One record of `docker system df --format '{{json .}}'`.
#[derive(Debug, Deserialize)]
struct UsageRecord {
    #[serde(rename = "Reclaimable", default)]
    reclaimable: String,
}

/// Total bytes the daemon reports as reclaimable, 0 when unavailable.
pub fn reclaimable_bytes() -> u64 {
    if client_path().is_none() {
        return 0;
    }

    let output = match Command::new("docker")
        .args(["system", "df", "--format", "{{json .}}"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return 0,
    };

    parse_usage_report(&String::from_utf8_lossy(&output.stdout))
}

/// Sum the `Reclaimable` fields of a line-delimited usage report.
///
/// Lines that are empty, unparseable, or explicitly zero ("0B" prefix)
/// are skipped individually; they never fail the whole report.
fn parse_usage_report(report: &str) -> u64 {
    let mut total = 0u64;

    for line in report.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: UsageRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => continue,
        };
        let field = record.reclaimable.trim();
        if field.is_empty() || field.starts_with("0B") {
            continue;
        }
        // The field reads like "1.2GB (50%)"; only the first token is a size
        let token = field.split_whitespace().next().unwrap_or("");
        if let Some(bytes) = size::parse_engine_size(token) {
            total += bytes;
        }
    }

    total
}

/// Remove all unused docker images, containers, and volumes.
pub fn prune() -> Result<()> {
    let status = Command::new("docker")
        .args(["system", "prune", "-af", "--volumes"])
        .status()
        .context("failed to run docker system prune")?;

    if !status.success() {
        bail!("docker system prune exited with {}", status);
    }
    Ok(())
}
