//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`V4K_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use vec4kit_math::{Vector4, DEFAULT_EPSILON};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Numeric tolerances
    #[serde(default)]
    pub math: MathConfig,
    /// Point report inputs
    #[serde(default)]
    pub report: ReportConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`V4K_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // V4K_MATH__EPSILON=0.01 -> math.epsilon = 0.01
        figment = figment.merge(Env::prefixed("V4K_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Numeric tolerance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathConfig {
    /// Tolerance for approximate comparisons
    pub epsilon: f32,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Point report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Homogeneous points, each written as [x, y, z, w]
    pub points: Vec<Vector4>,
    /// Interpolation steps per segment between consecutive points
    pub lerp_steps: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            points: vec![
                Vector4::new(2.0, 4.0, 6.0, 2.0),
                Vector4::new(0.0, 0.0, 0.0, 1.0),
                Vector4::new(6.0, 0.0, 8.0, 2.0),
            ],
            lerp_steps: 4,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level used when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.math.epsilon, 1e-5);
        assert_eq!(config.report.lerp_steps, 4);
        assert_eq!(config.report.points.len(), 3);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("epsilon"));
        assert!(toml.contains("lerp_steps"));
        // Points are written as plain arrays
        assert!(toml.contains("[2.0, 4.0, 6.0, 2.0]"));
    }

    #[test]
    fn test_points_parse_as_arrays() {
        let config: AppConfig = toml::from_str(
            r#"
            [report]
            points = [[1.0, 2.0, 3.0, 1.0], [4.0, 4.0, 4.0, 2.0]]
            lerp_steps = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.report.points[1], Vector4::new(4.0, 4.0, 4.0, 2.0));
        assert_eq!(config.report.lerp_steps, 2);
        // Missing sections fall back to defaults
        assert_eq!(config.math.epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.report.lerp_steps, 4);
    }
}
