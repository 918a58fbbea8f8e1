use lezzeat_core::{ConfigError, SlotWindow, StorefrontConfig, TaxRate, ThemeMode, TimeOfDay};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::time::Duration;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
currency_symbol = "Rs "
tax_rate_bps = 1200
simulated_latency_ms = 0
theme = "dark"

[pickup]
start = "11:00"
end = "14:30"
step_minutes = 30

[otp]
seed = 42

[logging]
level = "debug"
json = true
"#
    )
    .unwrap();

    let config = StorefrontConfig::load(file.path()).unwrap();
    assert_eq!(config.currency_symbol, "Rs ");
    assert_eq!(config.tax_rate(), TaxRate::from_bps(1200));
    assert_eq!(config.simulated_latency(), Duration::ZERO);
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.otp.seed, Some(42));
    assert!(config.logging.json);

    let window = config.slot_window().unwrap();
    assert_eq!(window.len(), 8);
    assert_eq!(window.describe(), "11:00 AM - 2:30 PM");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    match StorefrontConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn serialized_config_reloads() {
    let window = SlotWindow::new(
        TimeOfDay::new(8, 0).unwrap(),
        TimeOfDay::new(10, 0).unwrap(),
        20,
    )
    .unwrap();
    let config = StorefrontConfig::new()
        .with_pickup_window(window)
        .with_otp_seed(5);

    let text = toml::to_string(&config).unwrap();
    let reloaded = StorefrontConfig::from_toml_str(&text).unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(reloaded.slot_window().unwrap(), window);
}
