//! This crate maps the GPIO headers of [Orange Pi](http://www.orangepi.org/) boards to the pins of their Allwinner SoC.
//!
//! Initialization detects the chip and the board from the device tree, activates the chip's pins with their
//! alternate functions, binds them to the sysfs GPIOs of the host and registers the board's headers. Afterwards a
//! header position such as pin 7 of header `PA` resolves to a pin with its name, functions and OS handle.
//!
//! ```no_run
//! let host = orangepi_pinmap::init()?;
//! let pin = host.registry().pin("PA", 7)?;
//! println!("PA 7 is {}", pin);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Supported boards are the Orange Pi Zero (H2+/H3) and Orange Pi Zero 3 (H618). Reading and writing pins is out of
//! scope: use the OS handle of a pin with a GPIO crate of your choice.

use thiserror::Error;

pub mod allwinner;
pub mod config;
pub mod distro;
pub mod driver;
pub mod error;
pub mod orangepi;
pub mod pin;
mod pin_map;
pub mod registry;
pub mod sysfs;

pub use config::Config;
pub use driver::{init, Host};
pub use error::{ActivationError, DetectError, DriverError, ProbeError, RegistryError};
pub use pin::{Fixed, HeaderPin, LogicalPin, PinHandle, PinProvider, PinSet};
pub use pin_map::Bank;
pub use registry::Registry;

/// Main error type for this crate.
///
/// For more details, see the enums of the `error` module.
#[derive(Error, Debug)]
pub enum PinMapError {
    #[error("error while activating pins")]
    Activation(#[source] ActivationError),
    #[error("error while registering headers")]
    Registry(#[source] RegistryError),
    #[error("error while detecting the board")]
    Detect(#[source] DetectError),
    #[error("error while probing the host")]
    Probe(#[source] ProbeError),
    #[error("error while loading drivers")]
    Driver(#[source] DriverError),
}

pub type PinMapResult<T> = Result<T, PinMapError>;
