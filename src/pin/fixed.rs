use std::fmt;

use super::LogicalPin;

/// Header position that is not a GPIO: power rails, ground and signals this crate cannot drive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Fixed {
    Ground,
    V3_3,
    V5,
    /// Board input voltage, routed to the header as is.
    DcIn,
    /// Not connected, or a signal without any use as a pin (USB data lines, TV out).
    Invalid,
    /// Named analog signal of the SoC, such as a headphone output.
    Analog(&'static str),
}

impl Fixed {
    pub fn name(&self) -> &'static str {
        use Fixed::*;
        match self {
            Ground => "GROUND",
            V3_3 => "3.3V",
            V5 => "5V",
            DcIn => "DC_IN",
            Invalid => "INVALID",
            Analog(name) => *name,
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a registered header position is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderPin {
    Gpio(LogicalPin),
    Fixed(Fixed),
}

impl HeaderPin {
    pub fn name(&self) -> &str {
        match self {
            HeaderPin::Gpio(pin) => pin.name(),
            HeaderPin::Fixed(fixed) => fixed.name(),
        }
    }

    pub fn as_gpio(&self) -> Option<&LogicalPin> {
        match self {
            HeaderPin::Gpio(pin) => Some(pin),
            HeaderPin::Fixed(_) => None,
        }
    }

    pub fn is_gpio(&self) -> bool {
        self.as_gpio().is_some()
    }
}

impl From<Fixed> for HeaderPin {
    fn from(fixed: Fixed) -> Self {
        HeaderPin::Fixed(fixed)
    }
}

impl From<LogicalPin> for HeaderPin {
    fn from(pin: LogicalPin) -> Self {
        HeaderPin::Gpio(pin)
    }
}

impl fmt::Display for HeaderPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
