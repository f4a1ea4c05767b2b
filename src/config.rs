use crate::cli::Cli;

/// Settings shared by every video device in the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Adopt the bound display's device pixel ratio. When off, every
    /// surface renders at ratio 1.0.
    pub hidpi: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self { hidpi: true }
    }
}

impl From<&Cli> for DeviceConfig {
    fn from(cli: &Cli) -> Self {
        Self { hidpi: !cli.no_hidpi }
    }
}
