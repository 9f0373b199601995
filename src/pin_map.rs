use derive_try_from_primitive::TryFromPrimitive;
use std::fmt;

/// Number of pin slots reserved for each bank in the Allwinner GPIO numbering.
pub const PINS_PER_BANK: u32 = 32;

/// GPIO banks of Allwinner chips.
///
/// Pins are named after their bank and index (`PC5`, `PL11`) and numbered `bank * 32 + index`, which is also
/// the number the kernel uses for the pin in sysfs.
#[repr(u8)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Bank {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
}

impl Bank {
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn pin_number(self, index: u8) -> u32 {
        self as u32 * PINS_PER_BANK + index as u32
    }

    pub fn pin_name(self, index: u8) -> String {
        format!("P{}{}", self.letter(), index)
    }

    /// Bank holding the pin with the given number, if any.
    pub fn of_number(number: u32) -> Option<Self> {
        u8::try_from(number / PINS_PER_BANK)
            .ok()
            .and_then(|index| Bank::try_from(index).ok())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.letter())
    }
}
