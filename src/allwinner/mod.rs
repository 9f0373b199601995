//! Allwinner SoC support: pin identity sets, alternate-function tables and the generic GPIO driver.
//!
//! Every supported chip gets one `FunctionTable`. Tables share a single format, the only per-family parameter
//! being the marker found in the name of interrupt-capable functions.

use log::{debug, info};

use crate::driver::{Driver, Host, Presence};
use crate::error::ActivationError;
use crate::pin::{Func, PinProvider, PinSet, FUNC_SLOTS};
use crate::pin_map::Bank;
use crate::{PinMapError, PinMapResult};

mod h3;
mod h616;

/// Marker found in the interrupt function name of edge-capable pins (`PC_EINT0`, `S_PL_EINT11`).
pub const EINT_MARKER: &str = "_EINT";

/// Mapping of the pins of one chip to their alternate functions.
///
/// The in and out functions are available on every pin and are left out.
#[derive(Debug)]
pub struct FunctionTable {
    pub chip: &'static str,
    pub eint_marker: &'static str,
    pub entries: &'static [(&'static str, [Func; FUNC_SLOTS])],
}

impl FunctionTable {
    pub fn get(&self, name: &str) -> Option<&[Func; FUNC_SLOTS]> {
        self.entries
            .iter()
            .rev()
            .find(|(pin, _)| *pin == name)
            .map(|(_, funcs)| funcs)
    }
}

/// Uses `table` to set the alternate functions of the pins it names and mark them as available.
///
/// Edge detection is enabled on pins whose interrupt function carries the table's marker, and each pin is
/// bound to the handle `provider` has for its number. Pins the provider doesn't know keep no handle.
///
/// The whole table is checked against `pins` first: a table naming a pin of another chip fails with
/// `ConfigMismatch` and leaves `pins` untouched. Applying the same table again gives the same result.
pub fn apply_function_table(
    pins: &mut PinSet,
    table: &FunctionTable,
    provider: &dyn PinProvider,
) -> Result<(), ActivationError> {
    use ActivationError::*;

    if let Some((pin, _)) = table.entries.iter().find(|(pin, _)| !pins.contains(pin)) {
        return Err(ConfigMismatch {
            table: table.chip,
            pin: *pin,
        });
    }

    info!("allwinner: Initializing {} pins", table.chip);
    let mut unbound = 0;
    for (name, alt_functions) in table.entries {
        if let Some(pin) = pins.get_mut(name) {
            let handle = provider.pin(pin.number());
            if handle.is_none() {
                unbound += 1;
            }
            pin.activate(*alt_functions, table.eint_marker, handle.as_ref());
        }
    }

    if unbound > 0 {
        debug!(
            "allwinner: {} of {} {} pins have no OS handle",
            unbound,
            table.entries.len(),
            table.chip
        );
    }
    Ok(())
}

/// Supported Allwinner chips.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Chip {
    /// H3, and the H2+ which shares its pinout.
    H3,
    /// H616, and the H618 which shares its pinout.
    H616,
}

impl Chip {
    /// Picks the chip from the device-tree compatible list.
    pub fn from_compatible<S: AsRef<str>>(compatible: &[S]) -> Option<Self> {
        compatible.iter().find_map(|entry| match entry.as_ref() {
            "allwinner,sun8i-h3" | "allwinner,sun8i-h2-plus" => Some(Chip::H3),
            "allwinner,sun50i-h616" | "allwinner,sun50i-h618" => Some(Chip::H616),
            _ => None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Chip::H3 => "H3",
            Chip::H616 => "H616",
        }
    }

    /// GPIO banks of the chip with the number of pins in each.
    pub fn banks(self) -> &'static [(Bank, u8)] {
        match self {
            Chip::H3 => h3::BANKS,
            Chip::H616 => h616::BANKS,
        }
    }

    pub fn function_table(self) -> &'static FunctionTable {
        match self {
            Chip::H3 => &h3::FUNCTIONS,
            Chip::H616 => &h616::FUNCTIONS,
        }
    }

    /// Identity set of every pin of the chip, none of them activated yet.
    pub fn pin_set(self) -> PinSet {
        PinSet::from_banks(self.banks())
    }
}

/// Driver activating the GPIO pins of the detected Allwinner chip.
#[derive(Debug, Default)]
pub struct AllwinnerGpio {
    chip: Option<Chip>,
}

impl AllwinnerGpio {
    pub const NAME: &'static str = "allwinner-gpio";
}

impl Driver for AllwinnerGpio {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detect(&mut self, host: &Host) -> PinMapResult<Presence> {
        let system = host.system();
        if !system.is_arm {
            return Ok(Presence::Absent("not an ARM host".into()));
        }

        self.chip = Chip::from_compatible(system.dt_compatible.as_slice());
        Ok(match self.chip {
            Some(chip) => {
                debug!("allwinner: Detected {}", chip.name());
                Presence::Detected
            }
            None => Presence::Absent("no supported Allwinner chip".into()),
        })
    }

    fn register(&mut self, host: &mut Host) -> PinMapResult<()> {
        let chip = match self.chip {
            Some(chip) => chip,
            None => return Ok(()),
        };

        let mut pins = chip.pin_set();
        apply_function_table(&mut pins, chip.function_table(), host.provider())
            .map_err(PinMapError::Activation)?;
        host.set_pins(chip, pins);
        Ok(())
    }
}
