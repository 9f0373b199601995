//! Prints the headers of the board this runs on, with the functions of every GPIO.
//!
//! Run with `RUST_LOG=debug` to follow detection. The device tree and sysfs locations can be redirected with the
//! `PINMAP_DT_MODEL`, `PINMAP_DT_COMPATIBLE` and `PINMAP_SYSFS_GPIO` environment variables.

use orangepi_pinmap::driver::DriverState;
use orangepi_pinmap::HeaderPin;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = orangepi_pinmap::init()?;
    for report in host.drivers() {
        match &report.state {
            DriverState::Failed(err) => println!("{}: failed: {}", report.name, err),
            state => println!("{}: {:?}", report.name, state),
        }
    }

    let registry = host.registry();
    for header in registry.headers() {
        println!("\n{}", header);
        let mut position = 0;
        for row in registry.layout(header).unwrap_or_default() {
            for slot in row {
                position += 1;
                match slot {
                    HeaderPin::Gpio(pin) => {
                        let functions: Vec<_> = pin.alt_functions().iter().filter(|f| !f.is_empty()).collect();
                        let handle = pin.os_handle().map(|h| h.name().to_owned()).unwrap_or_else(|| "-".into());
                        println!(
                            "{:>3}  {:<6} {:<8} edge={:<5} {:?}",
                            position,
                            pin.name(),
                            handle,
                            pin.supports_edge(),
                            functions
                        );
                    }
                    HeaderPin::Fixed(fixed) => println!("{:>3}  {}", position, fixed),
                }
            }
        }
    }

    Ok(())
}
