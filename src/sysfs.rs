//! Pin handles backed by the sysfs GPIO class.
//!
//! The GPIO controllers of the host are enumerated once from the `gpiochipN` directories: each one covers the
//! pin numbers `base..base + ngpio`. Driving the pins is left to the users of the handles.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::error::ProbeError;
use crate::pin::{PinHandle, PinProvider};

/// A GPIO exposed by the kernel as `gpioN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPin {
    number: u32,
    name: String,
    chip: String,
    path: PathBuf,
}

impl SysfsPin {
    /// Label of the controller owning the pin.
    pub fn chip(&self) -> &str {
        &self.chip
    }

    /// Directory the kernel creates for the pin once it is exported.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PinHandle for SysfsPin {
    fn number(&self) -> u32 {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// All sysfs pins of the host, keyed by number.
#[derive(Debug, Default)]
pub struct SysfsPins {
    pins: BTreeMap<u32, Arc<SysfsPin>>,
}

impl SysfsPins {
    /// Enumerates the controllers under `root`.
    ///
    /// A missing `root` means the kernel has no sysfs GPIO support and gives an empty set. A controller with
    /// unreadable or malformed attributes is an error.
    pub fn probe(root: impl AsRef<Path>) -> Result<Self, ProbeError> {
        use ProbeError::*;

        let root = root.as_ref();
        let mut set = Self::default();
        if !root.is_dir() {
            warn!("sysfs: {} not found, pins have no OS handle", root.display());
            return Ok(set);
        }

        let entries = fs::read_dir(root).map_err(|source| ReadFailed {
            path: root.to_owned(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| ReadFailed {
                path: root.to_owned(),
                source,
            })?;
            let file_name = entry.file_name();
            if !file_name.to_string_lossy().starts_with("gpiochip") {
                continue;
            }

            let chip_dir = entry.path();
            let base = read_number(&chip_dir.join("base"))?;
            let ngpio_path = chip_dir.join("ngpio");
            let ngpio = read_number(&ngpio_path)?;
            // The kernel stores ngpio as a u16.
            let end = match base.checked_add(ngpio) {
                Some(end) if ngpio <= u32::from(u16::MAX) => end,
                _ => {
                    return Err(InvalidAttribute {
                        path: ngpio_path,
                        value: ngpio.to_string(),
                    })
                }
            };
            let label = read_attribute(&chip_dir.join("label"))
                .unwrap_or_else(|_| file_name.to_string_lossy().into_owned());
            debug!("sysfs: {} covers pins {}..{}", label, base, end);

            for number in base..end {
                set.pins.insert(
                    number,
                    Arc::new(SysfsPin {
                        number,
                        name: format!("GPIO{}", number),
                        chip: label.clone(),
                        path: root.join(format!("gpio{}", number)),
                    }),
                );
            }
        }

        Ok(set)
    }

    pub fn get(&self, number: u32) -> Option<&Arc<SysfsPin>> {
        self.pins.get(&number)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl PinProvider for SysfsPins {
    fn pin(&self, number: u32) -> Option<Arc<dyn PinHandle>> {
        self.pins
            .get(&number)
            .map(|pin| Arc::clone(pin) as Arc<dyn PinHandle>)
    }
}

fn read_attribute(path: &Path) -> Result<String, ProbeError> {
    fs::read_to_string(path)
        .map(|value| value.trim().to_owned())
        .map_err(|source| ProbeError::ReadFailed {
            path: path.to_owned(),
            source,
        })
}

fn read_number(path: &Path) -> Result<u32, ProbeError> {
    let value = read_attribute(path)?;
    value.parse().map_err(|_| ProbeError::InvalidAttribute {
        path: path.to_owned(),
        value,
    })
}
