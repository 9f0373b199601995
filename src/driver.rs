//! Driver lifecycle and host initialization.
//!
//! Initialization runs once per process. Every driver goes through
//! `Uninitialized -> Detecting -> (Absent | Detected) -> (Registered | Failed)`, in an order satisfying the
//! dependencies drivers declare. The resulting `Host` is read-only and shared by every caller of `init`.

use std::sync::Arc;

use log::{debug, info, warn};
use once_cell::sync::OnceCell;

use crate::allwinner::{AllwinnerGpio, Chip};
use crate::config::Config;
use crate::distro::SystemInfo;
use crate::error::DriverError;
use crate::orangepi::OrangePi;
use crate::pin::{LogicalPin, PinProvider, PinSet};
use crate::registry::Registry;
use crate::sysfs::SysfsPins;
use crate::{PinMapError, PinMapResult};

/// Outcome of a driver's detection step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Presence {
    /// The driver doesn't apply to this host. Not an error.
    Absent(String),
    Detected,
}

pub trait Driver {
    fn name(&self) -> &'static str;

    /// Drivers that must be registered for this one to run. If one is absent or failed, this driver is skipped.
    fn prerequisites(&self) -> &'static [&'static str] {
        &[]
    }

    /// Drivers that must run before this one when they are loaded, without being required.
    fn after(&self) -> &'static [&'static str] {
        &[]
    }

    fn detect(&mut self, host: &Host) -> PinMapResult<Presence>;

    /// Called once, after a successful detection.
    fn register(&mut self, host: &mut Host) -> PinMapResult<()>;
}

#[derive(Debug)]
pub enum DriverState {
    Uninitialized,
    Detecting,
    Absent(String),
    Detected,
    Registered,
    Failed(PinMapError),
}

impl DriverState {
    pub fn is_registered(&self) -> bool {
        matches!(self, DriverState::Registered)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DriverState::Absent(_))
    }

    pub fn error(&self) -> Option<&PinMapError> {
        match self {
            DriverState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct DriverReport {
    pub name: &'static str,
    pub state: DriverState,
}

/// Runs drivers in dependency order.
#[derive(Default)]
pub struct Loader {
    drivers: Vec<Box<dyn Driver>>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drivers shipped with this crate.
    pub fn with_default_drivers() -> Self {
        Self {
            drivers: vec![
                Box::new(AllwinnerGpio::default()),
                Box::new(OrangePi::default()),
            ],
        }
    }

    pub fn add(&mut self, driver: Box<dyn Driver>) -> Result<(), DriverError> {
        let name = driver.name();
        if self.drivers.iter().any(|d| d.name() == name) {
            return Err(DriverError::Duplicate(name));
        }
        self.drivers.push(driver);
        Ok(())
    }

    /// Runs every driver against `host` and records how each one ended up in `host.drivers()`.
    ///
    /// A failing driver doesn't stop the others.
    pub fn run(self, host: &mut Host) {
        let mut pending: Vec<Box<dyn Driver>> = self.drivers;
        let names: Vec<&'static str> = pending.iter().map(|d| d.name()).collect();

        while !pending.is_empty() {
            let ready = pending.iter().position(|driver| {
                driver
                    .prerequisites()
                    .iter()
                    .chain(driver.after())
                    .filter(|dep| names.contains(dep))
                    .all(|dep| host.driver_state(dep).is_some())
            });

            let mut driver = match ready {
                Some(index) => pending.remove(index),
                None => {
                    let cycle: Vec<&'static str> = pending.iter().map(|d| d.name()).collect();
                    warn!("driver: Dependency cycle between {:?}", cycle);
                    for driver in pending.drain(..) {
                        host.set_state(
                            driver.name(),
                            DriverState::Failed(PinMapError::Driver(DriverError::Cycle(cycle.clone()))),
                        );
                    }
                    break;
                }
            };

            let state = Self::run_driver(driver.as_mut(), host, &names);
            host.set_state(driver.name(), state);
        }
    }

    /// Runs one driver up to its final state, which is returned. Intermediate states are recorded in `host` as
    /// they are entered.
    fn run_driver(driver: &mut dyn Driver, host: &mut Host, names: &[&'static str]) -> DriverState {
        let name = driver.name();
        host.set_state(name, DriverState::Uninitialized);

        for &prerequisite in driver.prerequisites() {
            let error = if !names.contains(&prerequisite) {
                DriverError::MissingPrerequisite {
                    driver: name,
                    prerequisite,
                }
            } else if host
                .driver_state(prerequisite)
                .map_or(false, DriverState::is_registered)
            {
                continue;
            } else {
                DriverError::PrerequisiteNotLoaded {
                    driver: name,
                    prerequisite,
                }
            };
            warn!("driver: Skipping {}: {}", name, error);
            return DriverState::Failed(PinMapError::Driver(error));
        }

        host.set_state(name, DriverState::Detecting);
        match driver.detect(host) {
            Ok(Presence::Absent(reason)) => return DriverState::Absent(reason),
            Ok(Presence::Detected) => host.set_state(name, DriverState::Detected),
            Err(err) => {
                warn!("driver: {} detection failed: {}", name, err);
                return DriverState::Failed(err);
            }
        }

        match driver.register(host) {
            Ok(()) => {
                info!("driver: {} registered", name);
                DriverState::Registered
            }
            Err(err) => {
                warn!("driver: {} failed: {}", name, err);
                DriverState::Failed(err)
            }
        }
    }
}

/// Pins and headers of the running host.
pub struct Host {
    system: SystemInfo,
    provider: Arc<dyn PinProvider>,
    chip: Option<Chip>,
    pins: PinSet,
    registry: Registry,
    drivers: Vec<DriverReport>,
}

impl Host {
    /// Empty host, before any driver ran.
    pub fn new(system: SystemInfo, provider: Arc<dyn PinProvider>) -> Self {
        Self {
            system,
            provider,
            chip: None,
            pins: PinSet::new(),
            registry: Registry::new(),
            drivers: Vec::new(),
        }
    }

    /// Probes the host described by `config` and runs the default drivers.
    pub fn probe(config: &Config) -> PinMapResult<Self> {
        let system = SystemInfo::probe(config);
        let provider = SysfsPins::probe(&config.sysfs_gpio).map_err(PinMapError::Probe)?;
        Ok(Self::load(system, Arc::new(provider), Loader::with_default_drivers()))
    }

    pub fn load(system: SystemInfo, provider: Arc<dyn PinProvider>, loader: Loader) -> Self {
        let mut host = Self::new(system, provider);
        loader.run(&mut host);
        host
    }

    pub fn system(&self) -> &SystemInfo {
        &self.system
    }

    pub fn provider(&self) -> &dyn PinProvider {
        self.provider.as_ref()
    }

    /// Chip whose pins were activated.
    pub fn chip(&self) -> Option<Chip> {
        self.chip
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    pub fn pin(&self, name: &str) -> Option<&LogicalPin> {
        self.pins.get(name)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn drivers(&self) -> &[DriverReport] {
        &self.drivers
    }

    /// State of a driver. While the loader runs, this is the state the driver is currently in.
    pub fn driver_state(&self, name: &str) -> Option<&DriverState> {
        self.drivers
            .iter()
            .find(|report| report.name == name)
            .map(|report| &report.state)
    }

    pub(crate) fn set_pins(&mut self, chip: Chip, pins: PinSet) {
        self.chip = Some(chip);
        self.pins = pins;
    }

    pub(crate) fn registry_and_pins_mut(&mut self) -> (&mut Registry, &PinSet) {
        (&mut self.registry, &self.pins)
    }

    fn set_state(&mut self, name: &'static str, state: DriverState) {
        debug!("driver: {} {:?}", name, state);
        match self.drivers.iter_mut().find(|report| report.name == name) {
            Some(report) => report.state = state,
            None => self.drivers.push(DriverReport { name, state }),
        }
    }
}

static HOST: OnceCell<Host> = OnceCell::new();

/// Initializes the host once, with the configuration from the environment, and returns it.
///
/// Later calls return the same host. Drivers failing is not an error: check `Host::drivers` for their state.
pub fn init() -> PinMapResult<&'static Host> {
    HOST.get_or_try_init(|| Host::probe(&Config::from_env()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::UNKNOWN_MODEL;
    use crate::error::DetectError;
    use crate::pin::NoPins;
    use std::sync::Mutex;

    fn system(model: &str, compatible: &[&str]) -> SystemInfo {
        SystemInfo {
            dt_model: model.to_owned(),
            dt_compatible: compatible.iter().map(|c| c.to_string()).collect(),
            is_arm: true,
        }
    }

    struct Probe {
        name: &'static str,
        prerequisites: &'static [&'static str],
        after: &'static [&'static str],
        presence: Presence,
    }

    impl Probe {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                prerequisites: &[],
                after: &[],
                presence: Presence::Detected,
            }
        }
    }

    impl Driver for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn prerequisites(&self) -> &'static [&'static str] {
            self.prerequisites
        }

        fn after(&self) -> &'static [&'static str] {
            self.after
        }

        fn detect(&mut self, _host: &Host) -> PinMapResult<Presence> {
            Ok(self.presence.clone())
        }

        fn register(&mut self, _host: &mut Host) -> PinMapResult<()> {
            Ok(())
        }
    }

    /// Records the state the host reports for it at each step.
    struct Witness(Arc<Mutex<Vec<String>>>);

    impl Witness {
        fn note(&self, host: &Host) {
            let state = format!("{:?}", host.driver_state("witness"));
            self.0.lock().unwrap().push(state);
        }
    }

    impl Driver for Witness {
        fn name(&self) -> &'static str {
            "witness"
        }

        fn detect(&mut self, host: &Host) -> PinMapResult<Presence> {
            self.note(host);
            Ok(Presence::Detected)
        }

        fn register(&mut self, host: &mut Host) -> PinMapResult<()> {
            self.note(host);
            Ok(())
        }
    }

    fn run(drivers: Vec<Probe>) -> Host {
        let mut loader = Loader::new();
        for driver in drivers {
            loader.add(Box::new(driver)).unwrap();
        }
        Host::load(system("test", &[]), Arc::new(NoPins), loader)
    }

    fn order(host: &Host) -> Vec<&'static str> {
        host.drivers().iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_after_orders_drivers() {
        let host = run(vec![
            Probe {
                after: &["b"],
                ..Probe::new("a")
            },
            Probe::new("b"),
        ]);
        assert_eq!(order(&host), vec!["b", "a"]);
        assert!(host.drivers().iter().all(|r| r.state.is_registered()));
    }

    #[test]
    fn test_states_are_visible_while_running() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut loader = Loader::new();
        loader.add(Box::new(Witness(Arc::clone(&seen)))).unwrap();
        let host = Host::load(system("test", &[]), Arc::new(NoPins), loader);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Some(Detecting)".to_string(), "Some(Detected)".to_string()]
        );
        assert_eq!(host.drivers().len(), 1);
        assert!(host.driver_state("witness").unwrap().is_registered());
    }

    #[test]
    fn test_absent_prerequisite_skips_driver() {
        let host = run(vec![
            Probe {
                prerequisites: &["base"],
                ..Probe::new("board")
            },
            Probe {
                presence: Presence::Absent("nothing here".into()),
                ..Probe::new("base")
            },
        ]);
        assert!(host.driver_state("base").unwrap().is_absent());
        assert!(matches!(
            host.driver_state("board").and_then(DriverState::error),
            Some(PinMapError::Driver(DriverError::PrerequisiteNotLoaded { .. }))
        ));
    }

    #[test]
    fn test_missing_prerequisite() {
        let host = run(vec![Probe {
            prerequisites: &["ghost"],
            ..Probe::new("board")
        }]);
        assert!(matches!(
            host.driver_state("board").and_then(DriverState::error),
            Some(PinMapError::Driver(DriverError::MissingPrerequisite {
                prerequisite: "ghost",
                ..
            }))
        ));
    }

    #[test]
    fn test_cycle() {
        let host = run(vec![
            Probe {
                after: &["b"],
                ..Probe::new("a")
            },
            Probe {
                after: &["a"],
                ..Probe::new("b")
            },
            Probe::new("c"),
        ]);
        assert!(host.driver_state("c").unwrap().is_registered());
        assert!(matches!(
            host.driver_state("a").and_then(DriverState::error),
            Some(PinMapError::Driver(DriverError::Cycle(_)))
        ));
    }

    #[test]
    fn test_duplicate_driver() {
        let mut loader = Loader::new();
        loader.add(Box::new(Probe::new("a"))).unwrap();
        assert_eq!(
            loader.add(Box::new(Probe::new("a"))),
            Err(DriverError::Duplicate("a"))
        );
    }

    #[test]
    fn test_default_drivers_on_orangepi_zero3() {
        let host = Host::load(
            system("OrangePi Zero3", &["xunlong,orangepi-zero3", "allwinner,sun50i-h618"]),
            Arc::new(NoPins),
            Loader::with_default_drivers(),
        );

        assert_eq!(order(&host), vec![AllwinnerGpio::NAME, OrangePi::NAME]);
        assert!(host.driver_state(AllwinnerGpio::NAME).unwrap().is_registered());
        assert!(host.driver_state(OrangePi::NAME).unwrap().is_registered());
        assert_eq!(host.chip(), Some(Chip::H616));
        assert!(host.pin("PC0").unwrap().available());
        assert_eq!(host.registry().headers().collect::<Vec<_>>(), vec!["PA"]);
    }

    #[test]
    fn test_default_drivers_off_arm() {
        let mut info = system("OrangePi Zero", &["allwinner,sun8i-h3"]);
        info.is_arm = false;
        let host = Host::load(info, Arc::new(NoPins), Loader::with_default_drivers());

        assert!(host.drivers().iter().all(|r| r.state.is_absent()));
        assert!(host.pins().is_empty());
        assert_eq!(host.registry().headers().count(), 0);
    }

    #[test]
    fn test_unknown_orangepi_model_fails() {
        let host = Host::load(
            system("OrangePi 5", &["rockchip,rk3588s"]),
            Arc::new(NoPins),
            Loader::with_default_drivers(),
        );

        assert!(host.driver_state(AllwinnerGpio::NAME).unwrap().is_absent());
        assert!(matches!(
            host.driver_state(OrangePi::NAME).and_then(DriverState::error),
            Some(PinMapError::Detect(_))
        ));
    }

    #[test]
    fn test_unreadable_model_fails_orangepi() {
        let host = Host::load(
            system(UNKNOWN_MODEL, &[]),
            Arc::new(NoPins),
            Loader::with_default_drivers(),
        );

        assert!(host.driver_state(AllwinnerGpio::NAME).unwrap().is_absent());
        assert!(matches!(
            host.driver_state(OrangePi::NAME).and_then(DriverState::error),
            Some(PinMapError::Detect(DetectError::ModelUnresolved(model))) if model == UNKNOWN_MODEL
        ));
    }

    #[test]
    fn test_other_board_is_absent() {
        let host = Host::load(
            system("Raspberry Pi 4 Model B", &["raspberrypi,4-model-b", "brcm,bcm2711"]),
            Arc::new(NoPins),
            Loader::with_default_drivers(),
        );
        assert!(host.drivers().iter().all(|r| r.state.is_absent()));
    }
}
