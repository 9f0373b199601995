use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use orangepi_pinmap::distro::SystemInfo;
use orangepi_pinmap::driver::{DriverState, Loader};
use orangepi_pinmap::sysfs::SysfsPins;
use orangepi_pinmap::{Config, Fixed, HeaderPin, Host, PinMapError, RegistryError};

fn fake_sysfs(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("pinmap-host-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&root);
    for (dir, base, ngpio) in [("gpiochip0", "0", "288"), ("gpiochip352", "352", "32")] {
        let chip = root.join(dir);
        fs::create_dir_all(&chip).unwrap();
        fs::write(chip.join("base"), base).unwrap();
        fs::write(chip.join("ngpio"), ngpio).unwrap();
    }
    root
}

fn load(model: &str, compatible: &str, sysfs: &Path) -> Host {
    let system = SystemInfo {
        dt_model: model.to_owned(),
        dt_compatible: vec![compatible.to_owned()],
        is_arm: true,
    };
    let provider = SysfsPins::probe(sysfs).unwrap();
    Host::load(system, Arc::new(provider), Loader::with_default_drivers())
}

#[test]
fn zero3_header_resolves_to_sysfs_pins() {
    let host = load("OrangePi Zero3", "allwinner,sun50i-h618", &fake_sysfs("zero3"));
    let registry = host.registry();

    assert_eq!(registry.pin("PA", 1), Ok(&HeaderPin::Fixed(Fixed::V3_3)));

    let pin = registry.pin("PA", 3).unwrap().as_gpio().unwrap();
    assert_eq!(pin.name(), "PH5");
    assert_eq!(pin.number(), 229);
    assert!(pin.available());
    assert!(pin.supports_edge());

    let handle = pin.os_handle().unwrap();
    assert_eq!(handle.number(), 229);
    assert_eq!(handle.name(), "GPIO229");
}

#[test]
fn zero_registers_both_headers() {
    let host = load("OrangePi Zero", "allwinner,sun8i-h2-plus", &fake_sysfs("zero"));
    let registry = host.registry();

    assert_eq!(registry.headers().collect::<Vec<_>>(), vec!["FUN", "PA"]);
    assert_eq!(registry.positions_of("PL11"), vec![("FUN", 13)]);

    let ir = registry.pin("FUN", 13).unwrap().as_gpio().unwrap();
    assert_eq!(ir.os_handle().map(|h| h.number()), Some(363));
}

#[test]
fn board_without_matching_chip_fails_without_headers() {
    let host = load("OrangePi Zero", "allwinner,sun50i-h616", &fake_sysfs("mismatch"));

    assert!(host
        .driver_state("allwinner-gpio")
        .map_or(false, DriverState::is_registered));
    assert!(matches!(
        host.driver_state("orangepi").and_then(DriverState::error),
        Some(PinMapError::Registry(RegistryError::UnknownPin { .. }))
    ));
    assert_eq!(host.registry().headers().count(), 0);
}

#[test]
fn probe_without_device_tree() {
    let config = Config::default()
        .with_dt_model("/nonexistent/model")
        .with_dt_compatible("/nonexistent/compatible")
        .with_sysfs_gpio("/nonexistent/gpio");
    let host = Host::probe(&config).unwrap();

    assert!(host.pins().is_empty());
    assert_eq!(host.registry().headers().count(), 0);
    assert!(host
        .driver_state("allwinner-gpio")
        .map_or(false, DriverState::is_absent));
}

#[test]
fn init_returns_the_same_host() {
    let first = orangepi_pinmap::init().unwrap() as *const Host;
    let second = orangepi_pinmap::init().unwrap() as *const Host;
    assert_eq!(first, second);
}
