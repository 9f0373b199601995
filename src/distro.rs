//! Facts about the running host, read once during initialization.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::Config;

/// Model reported when the device tree doesn't name one.
pub const UNKNOWN_MODEL: &str = "<unknown>";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SystemInfo {
    /// Device-tree model string, or `UNKNOWN_MODEL`.
    pub dt_model: String,
    /// Device-tree compatible list, most specific entry first.
    pub dt_compatible: Vec<String>,
    pub is_arm: bool,
}

impl SystemInfo {
    pub fn probe(config: &Config) -> Self {
        let info = Self {
            dt_model: read_dt_string(&config.dt_model).unwrap_or_else(|| UNKNOWN_MODEL.to_owned()),
            dt_compatible: read_dt_list(&config.dt_compatible),
            is_arm: is_arm(),
        };
        debug!(
            "distro: model {:?}, compatible {:?}, arm {}",
            info.dt_model, info.dt_compatible, info.is_arm
        );
        info
    }
}

fn is_arm() -> bool {
    let uts = nix::sys::utsname::uname();
    let machine = uts.machine();
    machine.starts_with("arm") || machine.starts_with("aarch64")
}

/// Device-tree strings are NUL terminated.
fn read_dt_string(path: &Path) -> Option<String> {
    let raw = fs::read(path).ok()?;
    let value = String::from_utf8_lossy(&raw);
    let value = value.trim_end_matches('\0').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn read_dt_list(path: &Path) -> Vec<String> {
    match fs::read(path) {
        Ok(raw) => String::from_utf8_lossy(&raw)
            .split('\0')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect(),
        Err(_) => Vec::new(),
    }
}
