//! Server configuration

use pricing_sdk::EngineConfig;
use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
///
/// Keys can come from `config/server.{toml,yaml,json}` or from `PRICING_*`
/// environment variables (`PRICING_RULES_COUNT`, `PRICING_FETCH_DELAY_MS`,
/// `PRICING_PORT`, ...). Missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level applied to the pricing crates
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Number of pricing rules generated at startup
    pub rules_count: i64,

    /// Seed for rule generation
    pub rules_seed: u64,

    /// Simulated upstream pricing-context latency per evaluation
    pub fetch_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            rules_count: engine.rules_count,
            rules_seed: engine.rules_seed,
            fetch_delay_ms: engine.fetch_delay_ms,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load configuration from `path` (extension optional) and `PRICING_*`
    /// environment variables.
    ///
    /// A missing file falls back to defaults. A file that exists but cannot
    /// be parsed is an error.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PRICING").try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read configuration: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Engine settings carried by this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_rules_count(self.rules_count)
            .with_rules_seed(self.rules_seed)
            .with_fetch_delay_ms(self.fetch_delay_ms)
    }

    /// Reject settings that must abort startup
    pub fn validate(&self) -> anyhow::Result<()> {
        self.engine_config()
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid server configuration: {}", e))
    }

    /// Default tracing filter directives for this configuration
    pub fn log_filter(&self) -> String {
        let level = &self.log_level;
        format!(
            "pricing_server={level},pricing_sdk={level},pricing_runtime={level},pricing_core={level},tower_http=debug"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.rules_count, 10_000);
        assert_eq!(config.rules_seed, 42);
        assert_eq!(config.fetch_delay_ms, 2500);
    }

    #[test]
    fn test_engine_config_mapping() {
        let config = ServerConfig {
            rules_count: 300,
            rules_seed: 9,
            fetch_delay_ms: 0,
            ..ServerConfig::default()
        };

        let engine = config.engine_config();
        assert_eq!(engine.rules_count, 300);
        assert_eq!(engine.rules_seed, 9);
        assert_eq!(engine.fetch_delay_ms, 0);
    }

    #[test]
    fn test_validate_rejects_negative_rules_count() {
        let config = ServerConfig {
            rules_count: -1,
            ..ServerConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rules_count"));
    }

    #[test]
    fn test_log_filter_uses_level() {
        let config = ServerConfig {
            log_level: "debug".to_string(),
            ..ServerConfig::default()
        };

        let filter = config.log_filter();
        assert!(filter.contains("pricing_server=debug"));
        assert!(filter.contains("pricing_runtime=debug"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "fetch_delay_ms": 10, "log_format": "json"}"#)
                .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.fetch_delay_ms, 10);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.rules_count, 10_000);
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pricing-server-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = scratch_dir("malformed");
        std::fs::write(dir.join("server.toml"), "rules_count = -5\nport = [[[\n").unwrap();

        let result = ServerConfig::load_from(dir.join("server").to_str().unwrap());
        std::fs::remove_dir_all(&dir).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }

    #[test]
    fn test_load_from_reads_file_values() {
        let dir = scratch_dir("valid");
        std::fs::write(
            dir.join("server.toml"),
            "port = 9100\nrules_seed = 7\nlog_format = \"json\"\n",
        )
        .unwrap();

        let result = ServerConfig::load_from(dir.join("server").to_str().unwrap());
        std::fs::remove_dir_all(&dir).ok();

        let config = result.unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.rules_seed, 7);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let result = ServerConfig::load_from(dir.join("server").to_str().unwrap());
        std::fs::remove_dir_all(&dir).ok();

        let config = result.unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.rules_count, 10_000);
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("127.0.0.1"));
        assert!(debug_str.contains("8080"));
    }
}
