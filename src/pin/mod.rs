//! Pin identity and capability model.
//!
//! A `LogicalPin` is a pin of the SoC as the datasheet names it. It starts out unavailable and becomes usable
//! once a function table of its chip has been applied (see `allwinner::apply_function_table`).

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use crate::pin_map::Bank;

mod fixed;
mod handle;

pub use fixed::{Fixed, HeaderPin};
pub use handle::{NoPins, PinHandle, PinProvider};

/// Name of an alternate function. An empty name marks an unsupported slot.
pub type Func = &'static str;

/// Number of alternate function slots per pin: functions 0 to 3 and the interrupt function.
pub const FUNC_SLOTS: usize = 5;

/// Slot holding the external interrupt function.
pub const EINT_SLOT: usize = 4;

#[derive(Clone, Debug)]
pub struct LogicalPin {
    name: String,
    number: u32,
    alt_functions: [Func; FUNC_SLOTS],
    available: bool,
    supports_edge: bool,
    os_handle: Option<Weak<dyn PinHandle>>,
}

impl LogicalPin {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number,
            alt_functions: [""; FUNC_SLOTS],
            available: false,
            supports_edge: false,
            os_handle: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn bank(&self) -> Option<Bank> {
        Bank::of_number(self.number)
    }

    /// All five function slots, empty names included.
    pub fn alt_functions(&self) -> &[Func; FUNC_SLOTS] {
        &self.alt_functions
    }

    /// Function at `slot`, or `None` if the slot is unsupported or out of range.
    pub fn alt_function(&self, slot: usize) -> Option<Func> {
        self.alt_functions
            .get(slot)
            .copied()
            .filter(|func| !func.is_empty())
    }

    /// Slot index under which `func` is available on this pin.
    pub fn function_slot(&self, func: &str) -> Option<usize> {
        if func.is_empty() {
            return None;
        }
        self.alt_functions.iter().position(|f| *f == func)
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn supports_edge(&self) -> bool {
        self.supports_edge
    }

    /// OS-backed handle of the pin.
    ///
    /// Returns `None` before activation, when the OS exposes no pin with this number, or when the provider
    /// owning the handle is gone.
    pub fn os_handle(&self) -> Option<Arc<dyn PinHandle>> {
        self.os_handle.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn activate(
        &mut self,
        alt_functions: [Func; FUNC_SLOTS],
        eint_marker: &str,
        os_handle: Option<&Arc<dyn PinHandle>>,
    ) {
        self.alt_functions = alt_functions;
        self.available = true;
        self.supports_edge = alt_functions[EINT_SLOT].contains(eint_marker);
        self.os_handle = os_handle.map(Arc::downgrade);
    }
}

// The OS handle is a cache of the provider's state, not part of the pin identity.
impl PartialEq for LogicalPin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.number == other.number
            && self.alt_functions == other.alt_functions
            && self.available == other.available
            && self.supports_edge == other.supports_edge
    }
}

impl Eq for LogicalPin {}

/// Set of all pins of one chip, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinSet {
    pins: BTreeMap<String, LogicalPin>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the identity set of a chip from its banks and the number of pins in each bank.
    pub fn from_banks(banks: &[(Bank, u8)]) -> Self {
        let mut set = Self::new();
        for &(bank, count) in banks {
            for index in 0..count {
                set.insert(LogicalPin::new(bank.pin_name(index), bank.pin_number(index)));
            }
        }
        set
    }

    /// Adds a pin, replacing any pin with the same name.
    pub fn insert(&mut self, pin: LogicalPin) -> Option<LogicalPin> {
        self.pins.insert(pin.name.clone(), pin)
    }

    pub fn get(&self, name: &str) -> Option<&LogicalPin> {
        self.pins.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut LogicalPin> {
        self.pins.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pins.contains_key(name)
    }

    pub fn by_number(&self, number: u32) -> Option<&LogicalPin> {
        self.pins.values().find(|pin| pin.number == number)
    }

    /// Iterates over pins in name order.
    pub fn iter(&self) -> impl Iterator<Item = &LogicalPin> {
        self.pins.values()
    }

    pub fn available(&self) -> impl Iterator<Item = &LogicalPin> {
        self.iter().filter(|pin| pin.available)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeHandle(u32);

    impl PinHandle for FakeHandle {
        fn number(&self) -> u32 {
            self.0
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    #[test]
    fn test_new_pin_is_unavailable() {
        let pin = LogicalPin::new("PC0", 64);
        assert!(!pin.available());
        assert!(!pin.supports_edge());
        assert!(pin.os_handle().is_none());
        assert_eq!(pin.alt_function(0), None);
        assert_eq!(pin.bank(), Some(Bank::C));
    }

    #[test]
    fn test_activate() {
        let handle: Arc<dyn PinHandle> = Arc::new(FakeHandle(64));
        let mut pin = LogicalPin::new("PC0", 64);
        pin.activate(
            ["NAND_WE", "SDC2_DS", "SPI0_CLK", "", "PC_EINT0"],
            "_EINT",
            Some(&handle),
        );

        assert!(pin.available());
        assert!(pin.supports_edge());
        assert_eq!(pin.alt_function(2), Some("SPI0_CLK"));
        assert_eq!(pin.alt_function(3), None);
        assert_eq!(pin.function_slot("SDC2_DS"), Some(1));
        assert_eq!(pin.function_slot(""), None);
        assert_eq!(pin.os_handle().map(|h| h.number()), Some(64));

        drop(handle);
        assert!(pin.os_handle().is_none());
    }

    #[test]
    fn test_pin_set_from_banks() {
        let set = PinSet::from_banks(&[(Bank::C, 3), (Bank::L, 12)]);
        assert_eq!(set.len(), 15);
        assert!(set.contains("PC2"));
        assert!(!set.contains("PC3"));
        assert_eq!(set.get("PL11").map(LogicalPin::number), Some(363));
        assert_eq!(set.by_number(65).map(LogicalPin::name), Some("PC1"));
        assert_eq!(set.available().count(), 0);
    }
}
