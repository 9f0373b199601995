use std::fmt;
use std::sync::Arc;

/// An OS-backed GPIO pin.
///
/// This crate never drives pins itself: it only keeps references to handles created by a `PinProvider`
/// so that header positions can be resolved to something usable for input, output and edge detection.
pub trait PinHandle: fmt::Debug + Send + Sync {
    /// Number of the pin in the OS numbering (the sysfs `gpioN` number).
    fn number(&self) -> u32;

    /// Name given to the pin by the OS.
    fn name(&self) -> &str;
}

/// Process-wide lookup from pin number to its OS-backed handle.
///
/// Lookups are expected to hit an in-memory table: a provider does its probing once, when it is built.
pub trait PinProvider: Send + Sync {
    fn pin(&self, number: u32) -> Option<Arc<dyn PinHandle>>;
}

/// Provider used when the host exposes no GPIO at all. Every pin stays without an OS handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPins;

impl PinProvider for NoPins {
    fn pin(&self, _number: u32) -> Option<Arc<dyn PinHandle>> {
        None
    }
}
