use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Enum representing possible failures when applying an alternate-function table to a pin set.
///
/// - ConfigMismatch - The table names a pin the chip does not have. This usually means the table of another chip
///   was selected for the running board. No pin of the set is modified when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    #[error("function table {table} references unknown pin {pin}")]
    ConfigMismatch {
        table: &'static str,
        pin: &'static str,
    },
}

/// Enum representing possible failures when registering or querying headers.
///
/// Registration failures:
/// - HeaderExists - The header name was registered before. The first layout stays registered.
/// - DuplicatePin - The same GPIO pin sits at two positions of one header.
/// - UnknownPin - A layout names a pin missing from the activated pin set.
/// - NotActivated - A layout names a pin whose function table was never applied.
/// - InvalidRow - A row holds something else than 1 or 2 slots.
/// - EmptyHeader - A header without any row.
///
/// Query failures:
/// - UnknownHeader - Nothing was registered under this name.
/// - OutOfRange - The position does not exist on the header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("header {0} is already registered")]
    HeaderExists(String),
    #[error("pin {pin} is bound twice on header {header}: at {first:?} and {second:?}")]
    DuplicatePin {
        header: String,
        pin: String,
        first: (usize, usize),
        second: (usize, usize),
    },
    #[error("header {header} references unknown pin {pin}")]
    UnknownPin { header: String, pin: String },
    #[error("header {header} references pin {pin} which is not activated")]
    NotActivated { header: String, pin: String },
    #[error("row {row} of header {header} has {len} slots, expected 1 or 2")]
    InvalidRow {
        header: String,
        row: usize,
        len: usize,
    },
    #[error("header {0} has no rows")]
    EmptyHeader(String),
    #[error("header {0} is not registered")]
    UnknownHeader(String),
    #[error("position {position} is out of range on header {header}")]
    OutOfRange { header: String, position: String },
}

/// Enum representing a failure to pick a board layout from the device-tree model.
///
/// - ModelUnresolved - The model string could not be read, or it belongs to the vendor but names a board this
///   crate has no layout for (usually a newer board variant).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("failed to resolve board model {0:?}")]
    ModelUnresolved(String),
}

/// Enum representing possible failures when probing the host for pins.
///
/// - ReadFailed - A sysfs attribute or directory could not be read.
/// - InvalidAttribute - A sysfs attribute does not hold a number, or a controller's `ngpio` is too large for its
///   pins to be numbered.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to read {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid value {value:?} in {}", path.display())]
    InvalidAttribute { path: PathBuf, value: String },
}

/// Enum representing possible failures of the driver loader itself.
///
/// - Duplicate - Two drivers share a name.
/// - MissingPrerequisite - A driver requires a driver that was never added to the loader.
/// - PrerequisiteNotLoaded - A required driver ended up absent or failed, so the dependent one is skipped.
/// - Cycle - Drivers depend on each other and none of them can run first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("driver {0} is added twice")]
    Duplicate(&'static str),
    #[error("driver {driver} requires unknown driver {prerequisite}")]
    MissingPrerequisite {
        driver: &'static str,
        prerequisite: &'static str,
    },
    #[error("driver {driver} requires {prerequisite} which did not load")]
    PrerequisiteNotLoaded {
        driver: &'static str,
        prerequisite: &'static str,
    },
    #[error("dependency cycle between drivers {0:?}")]
    Cycle(Vec<&'static str>),
}
