use clap::Parser;
use display_binding::cli::Cli;
use display_binding::DeviceConfig;

// Runs in its own test binary: the environment is process-wide.

#[test]
fn test_env_variable_disables_hidpi() {
    for (value, disabled) in [("1", true), ("yes", true), ("true", true), ("0", false), ("false", false)] {
        std::env::set_var("VIDEO_DEVICE_NO_HIDPI", value);
        let cli = Cli::try_parse_from(["display-binding"]).unwrap();
        assert_eq!(cli.no_hidpi, disabled, "VIDEO_DEVICE_NO_HIDPI={}", value);
        assert_eq!(DeviceConfig::from(&cli).hidpi, !disabled);
    }

    std::env::remove_var("VIDEO_DEVICE_NO_HIDPI");
    let cli = Cli::try_parse_from(["display-binding"]).unwrap();
    assert!(DeviceConfig::from(&cli).hidpi);

    let cli = Cli::try_parse_from(["display-binding", "--no-hidpi"]).unwrap();
    assert!(!DeviceConfig::from(&cli).hidpi);
}
