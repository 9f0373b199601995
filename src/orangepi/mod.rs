//! Orange Pi boards.
//!
//! The board is recognized from the device-tree model: a model starting with `OrangePi` belongs to the vendor,
//! and the exact string selects the header layouts. Headers are registered after the Allwinner GPIO driver has
//! activated the pins of the chip.

use log::{info, warn};

use crate::allwinner::{AllwinnerGpio, Chip};
use crate::distro::UNKNOWN_MODEL;
use crate::driver::{Driver, Host, Presence};
use crate::error::{DetectError, RegistryError};
use crate::pin::PinSet;
use crate::registry::{HeaderLayout, Registry};
use crate::{PinMapError, PinMapResult};

pub mod zero;
pub mod zero3;

/// Prefix of the device-tree model of every Orange Pi board.
pub const VENDOR_PREFIX: &str = "OrangePi";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Board {
    /// Orange Pi Zero and Zero LTS. The H2+ and H3 revisions have identical pinouts.
    Zero,
    Zero3,
}

impl Board {
    pub const ALL: &'static [Board] = &[Board::Zero, Board::Zero3];

    /// Device-tree models naming this board. The first one is the canonical name.
    pub fn models(self) -> &'static [&'static str] {
        match self {
            Board::Zero => &["OrangePi Zero"],
            Board::Zero3 => &["OrangePi Zero 3", "OrangePi Zero3"],
        }
    }

    pub fn name(self) -> &'static str {
        self.models()[0]
    }

    pub fn chip(self) -> Chip {
        match self {
            Board::Zero => Chip::H3,
            Board::Zero3 => Chip::H616,
        }
    }

    pub fn headers(self) -> &'static [HeaderLayout] {
        match self {
            Board::Zero => zero::HEADERS,
            Board::Zero3 => zero3::HEADERS,
        }
    }

    /// Registers every header of the board, in order.
    ///
    /// Headers are registered one by one: when one fails, those before it stay registered.
    pub fn register_headers(self, registry: &mut Registry, pins: &PinSet) -> Result<(), RegistryError> {
        for layout in self.headers() {
            registry.register_layout(layout, pins)?;
        }
        Ok(())
    }
}

/// Whether `model` is the device-tree model of an Orange Pi board, supported or not.
pub fn is_orangepi(model: &str) -> bool {
    model.starts_with(VENDOR_PREFIX)
}

/// Identifies the board from its device-tree model.
///
/// Returns `Ok(None)` when the model doesn't belong to an Orange Pi. An Orange Pi model without a known layout, or
/// the `<unknown>` model of a host whose device tree couldn't be read, is `ModelUnresolved`.
///
/// The `<unknown>` model is checked before the vendor prefix: an ARM host without a device tree (an ACPI server
/// for instance) can't be told apart from an Orange Pi with an unreadable one, so the `orangepi` driver ends up
/// `Failed` there rather than `Absent`.
pub fn detect(model: &str) -> Result<Option<Board>, DetectError> {
    use DetectError::*;

    if model == UNKNOWN_MODEL {
        return Err(ModelUnresolved(model.to_owned()));
    }
    if !is_orangepi(model) {
        return Ok(None);
    }

    Board::ALL
        .iter()
        .copied()
        .find(|board| board.models().iter().any(|m| *m == model))
        .map(Some)
        .ok_or_else(|| ModelUnresolved(model.to_owned()))
}

/// Driver registering the headers of the detected Orange Pi board.
#[derive(Debug, Default)]
pub struct OrangePi {
    board: Option<Board>,
}

impl OrangePi {
    pub const NAME: &'static str = "orangepi";

    pub fn board(&self) -> Option<Board> {
        self.board
    }
}

impl Driver for OrangePi {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    // The pins are activated by the generic Allwinner driver, identical on every Allwinner chip.
    fn after(&self) -> &'static [&'static str] {
        &[AllwinnerGpio::NAME]
    }

    fn detect(&mut self, host: &Host) -> PinMapResult<Presence> {
        let system = host.system();
        if !system.is_arm {
            return Ok(Presence::Absent("not an ARM host".into()));
        }

        let board = match detect(&system.dt_model).map_err(PinMapError::Detect)? {
            Some(board) => board,
            None => {
                return Ok(Presence::Absent(format!(
                    "{:?} is not an Orange Pi",
                    system.dt_model
                )))
            }
        };

        info!("orangepi: Detected {}", board.name());
        if host.chip() != Some(board.chip()) {
            warn!(
                "orangepi: {} expects an {} chip, found {:?}",
                board.name(),
                board.chip().name(),
                host.chip().map(Chip::name)
            );
        }
        self.board = Some(board);
        Ok(Presence::Detected)
    }

    fn register(&mut self, host: &mut Host) -> PinMapResult<()> {
        let board = match self.board {
            Some(board) => board,
            None => return Ok(()),
        };

        let (registry, pins) = host.registry_and_pins_mut();
        board
            .register_headers(registry, pins)
            .map_err(PinMapError::Registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allwinner::apply_function_table;
    use crate::pin::{Fixed, HeaderPin, NoPins};

    fn activated(chip: Chip) -> PinSet {
        let mut pins = chip.pin_set();
        apply_function_table(&mut pins, chip.function_table(), &NoPins).unwrap();
        pins
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect("OrangePi Zero"), Ok(Some(Board::Zero)));
        assert_eq!(detect("OrangePi Zero 3"), Ok(Some(Board::Zero3)));
        assert_eq!(detect("OrangePi Zero3"), Ok(Some(Board::Zero3)));
        assert_eq!(detect("Raspberry Pi 4 Model B Rev 1.4"), Ok(None));
        assert_eq!(detect(""), Ok(None));
    }

    #[test]
    fn test_detect_unresolved() {
        assert_eq!(
            detect("OrangePi 5 Plus"),
            Err(DetectError::ModelUnresolved("OrangePi 5 Plus".into()))
        );
        assert_eq!(
            detect(UNKNOWN_MODEL),
            Err(DetectError::ModelUnresolved(UNKNOWN_MODEL.into()))
        );
    }

    #[test]
    fn test_board_headers_resolve() {
        for &board in Board::ALL {
            let pins = activated(board.chip());
            let mut registry = Registry::new();
            board.register_headers(&mut registry, &pins).unwrap();
            assert_eq!(registry.headers().count(), board.headers().len());
        }
    }

    #[test]
    fn test_zero_layout() {
        let pins = activated(Chip::H3);
        let mut registry = Registry::new();
        Board::Zero.register_headers(&mut registry, &pins).unwrap();

        assert_eq!(registry.pin("PA", 1), Ok(&HeaderPin::Fixed(Fixed::DcIn)));
        assert_eq!(registry.pin("PA", 3).map(HeaderPin::name), Ok("PA12"));
        assert_eq!(registry.pin("PA", 26).map(HeaderPin::name), Ok("PA10"));
        assert_eq!(
            registry.pin("FUN", 7),
            Ok(&HeaderPin::Fixed(Fixed::Analog("HP_RIGHT")))
        );

        let ir = registry.pin("FUN", 13).unwrap().as_gpio().unwrap();
        assert_eq!(ir.alt_function(0), Some("S_CIR_RX"));
        assert!(ir.supports_edge());
    }

    #[test]
    fn test_zero3_layout() {
        let pins = activated(Chip::H616);
        let mut registry = Registry::new();
        Board::Zero3.register_headers(&mut registry, &pins).unwrap();

        assert_eq!(registry.lookup("PA", 0, 0), Ok(&HeaderPin::Fixed(Fixed::V3_3)));
        assert_eq!(registry.pin("PA", 7).map(HeaderPin::name), Ok("PC9"));
        assert_eq!(registry.pin("PA", 16).map(HeaderPin::name), Ok("PC15"));
        assert_eq!(registry.pin("PA", 18).map(HeaderPin::name), Ok("PC14"));
        assert_eq!(registry.positions_of("PH2"), vec![("PA", 8)]);
    }

    #[test]
    fn test_wrong_chip_fails_registration() {
        let pins = activated(Chip::H616);
        let mut registry = Registry::new();
        assert!(matches!(
            Board::Zero.register_headers(&mut registry, &pins),
            Err(RegistryError::UnknownPin { .. })
        ));
    }
}
