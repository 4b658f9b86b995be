//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use vec4kit::config::AppConfig;
use vec4kit::Vector4;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("V4K_MATH__EPSILON", "0.01");
    std::env::set_var("V4K_REPORT__LERP_STEPS", "8");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("V4K_MATH__EPSILON");
    std::env::remove_var("V4K_REPORT__LERP_STEPS");

    assert_eq!(config.math.epsilon, 0.01);
    assert_eq!(config.report.lerp_steps, 8);
}

#[test]
#[serial]
fn test_default_file_loading() {
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.report.points[0], Vector4::new(2.0, 4.0, 6.0, 2.0));
    assert_eq!(config.report.points.len(), 3);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("vec4kit-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[report]\npoints = [[1.0, 1.0, 1.0, 1.0]]\nlerp_steps = 2\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[report]\nlerp_steps = 6\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.report.points, vec![Vector4::ONE]);
    assert_eq!(config.report.lerp_steps, 6);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    std::env::set_var("V4K_REPORT__LERP_STEPS", "lots");
    let result = AppConfig::load();
    std::env::remove_var("V4K_REPORT__LERP_STEPS");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
