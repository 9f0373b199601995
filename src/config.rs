use std::env;
use std::path::PathBuf;

/// Locations the host is probed from.
///
/// The defaults point at the files Linux exposes on a board. Each path can be overridden, which is how tests and
/// chroots run the detection against a fake tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Device-tree model string, e.g. `OrangePi Zero3`.
    pub dt_model: PathBuf,
    /// NUL separated device-tree compatible list.
    pub dt_compatible: PathBuf,
    /// Root of the sysfs GPIO class, holding the `gpiochipN` directories.
    pub sysfs_gpio: PathBuf,
}

impl Config {
    pub const DT_MODEL: &'static str = "/proc/device-tree/model";
    pub const DT_COMPATIBLE: &'static str = "/proc/device-tree/compatible";
    pub const SYSFS_GPIO: &'static str = "/sys/class/gpio";

    pub const DT_MODEL_ENV: &'static str = "PINMAP_DT_MODEL";
    pub const DT_COMPATIBLE_ENV: &'static str = "PINMAP_DT_COMPATIBLE";
    pub const SYSFS_GPIO_ENV: &'static str = "PINMAP_SYSFS_GPIO";

    /// Default locations, overridden by `PINMAP_DT_MODEL`, `PINMAP_DT_COMPATIBLE` and `PINMAP_SYSFS_GPIO` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = env::var_os(Self::DT_MODEL_ENV) {
            config.dt_model = path.into();
        }
        if let Some(path) = env::var_os(Self::DT_COMPATIBLE_ENV) {
            config.dt_compatible = path.into();
        }
        if let Some(path) = env::var_os(Self::SYSFS_GPIO_ENV) {
            config.sysfs_gpio = path.into();
        }
        config
    }

    pub fn with_dt_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.dt_model = path.into();
        self
    }

    pub fn with_dt_compatible(mut self, path: impl Into<PathBuf>) -> Self {
        self.dt_compatible = path.into();
        self
    }

    pub fn with_sysfs_gpio(mut self, path: impl Into<PathBuf>) -> Self {
        self.sysfs_gpio = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt_model: Self::DT_MODEL.into(),
            dt_compatible: Self::DT_COMPATIBLE.into(),
            sysfs_gpio: Self::SYSFS_GPIO.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_dt_model("/tmp/model")
            .with_sysfs_gpio("/tmp/gpio");
        assert_eq!(config.dt_model, Path::new("/tmp/model"));
        assert_eq!(config.dt_compatible, Path::new(Config::DT_COMPATIBLE));
        assert_eq!(config.sysfs_gpio, Path::new("/tmp/gpio"));
    }
}
