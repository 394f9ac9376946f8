use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub appwrite: AppwriteSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_users_collection")]
    pub users: String,
    #[serde(default = "default_interactions_collection")]
    pub interactions: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            users: default_users_collection(),
            interactions: default_interactions_collection(),
        }
    }
}

fn default_users_collection() -> String { "users".to_string() }
fn default_interactions_collection() -> String { "interactions".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_baseline_weight")]
    pub baseline: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_age_weight(),
            interests: default_interests_weight(),
            distance: default_distance_weight(),
            baseline: default_baseline_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            age: config.age,
            interests: config.interests,
            distance: config.distance,
            baseline: config.baseline,
        }
    }
}

fn default_age_weight() -> f64 { 30.0 }
fn default_interests_weight() -> f64 { 40.0 }
fn default_distance_weight() -> f64 { 20.0 }
fn default_baseline_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

pub fn default_log_level() -> String { "info".to_string() }
pub fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with RENTAL__)
    /// 5. Conventional APPWRITE_* variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RENTAL__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Limit applied when a request does not carry one
    pub fn default_limit(&self) -> u16 {
        self.matching.default_limit.unwrap_or(20)
    }

    /// Upper bound on any requested limit
    pub fn max_limit(&self) -> u16 {
        self.matching.max_limit.unwrap_or(100)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)
}

fn environment() -> Environment {
    Environment::with_prefix("RENTAL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the conventional APPWRITE_* variables on top of loaded settings
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("APPWRITE_ENDPOINT", "appwrite.endpoint"),
        ("APPWRITE_API_KEY", "appwrite.api_key"),
        ("APPWRITE_PROJECT_ID", "appwrite.project_id"),
        ("APPWRITE_DATABASE_ID", "appwrite.database_id"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        with_defaults(Config::builder())?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.age, 30.0);
        assert_eq!(weights.interests, 40.0);
        assert_eq!(weights.distance, 20.0);
        assert_eq!(weights.baseline, 10.0);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_minimal_file_fills_defaults() {
        let settings = from_toml(
            r#"
            [appwrite]
            endpoint = "https://appwrite.test/v1"
            api_key = "key"
            project_id = "project"
            database_id = "db"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.collection.users, "users");
        assert_eq!(settings.collection.interactions, "interactions");
        assert_eq!(settings.default_limit(), 20);
        assert_eq!(settings.max_limit(), 100);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_partial_weights_override() {
        let settings = from_toml(
            r#"
            [appwrite]
            endpoint = "https://appwrite.test/v1"
            api_key = "key"
            project_id = "project"
            database_id = "db"

            [scoring.weights]
            interests = 50.0
            baseline = 0.0
            "#,
        )
        .unwrap();

        let weights = ScoringWeights::from(&settings.scoring.weights);
        assert_eq!(weights.interests, 50.0);
        assert_eq!(weights.baseline, 0.0);
        assert_eq!(weights.age, 30.0);
    }

    #[test]
    fn test_missing_appwrite_section_fails() {
        assert!(from_toml("[server]\nport = 9000\n").is_err());
    }
}
