//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use cgx::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CGX_LORENZ__SIGMA", "12.5");
    let result = AppConfig::load();
    std::env::remove_var("CGX_LORENZ__SIGMA");
    assert_eq!(result.unwrap().lorenz.sigma, 12.5);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("CGX_LORENZ__SIGMA");

    // Cargo runs integration tests from the package root
    let config = AppConfig::load().unwrap();
    assert_eq!(config.lorenz.steps, 50_000);
    assert_eq!(config.sphere.step, 5);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join("cgx_config_integration");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("default.toml"), "[lorenz]\nsteps = 100\nrho = 20.0\n").unwrap();
    fs::write(dir.join("user.toml"), "[lorenz]\nsteps = 10\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.lorenz.steps, 10);
    assert_eq!(config.lorenz.rho, 20.0);
    assert_eq!(config.lorenz.sigma, 10.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_empty_dir_gives_defaults() {
    let dir = std::env::temp_dir().join("cgx_config_integration_empty");
    fs::create_dir_all(&dir).unwrap();
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.debug.log_level, "info");
    assert!(config.texture.paths.is_empty());
}

#[test]
#[serial]
fn test_nested_env_override_leaves_environment_clean() {
    std::env::set_var("CGX_VIEW__TH", "45");
    std::env::set_var("CGX_DEBUG__LOG_LEVEL", "debug");
    let result = AppConfig::load();
    std::env::remove_var("CGX_VIEW__TH");
    std::env::remove_var("CGX_DEBUG__LOG_LEVEL");

    let config = result.unwrap();
    assert_eq!(config.view.th, 45);
    assert_eq!(config.debug.log_level, "debug");
    assert!(std::env::var("CGX_VIEW__TH").is_err());
}

#[test]
#[serial]
fn test_bad_value_is_error() {
    std::env::set_var("CGX_SPHERE__STEP", "not-a-number");
    let result = AppConfig::load();
    std::env::remove_var("CGX_SPHERE__STEP");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
