//! Configuration System
//!
//! Settings for the static host binary, loaded from a TOML file with
//! environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled UI (`index.html`, wasm, assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("sure-circle-ui/dist")
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("sure_circle={},tower_http=debug", self.level)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadReport, ConfigError> {
        let config = Self::load(path)?;
        Ok(LoadReport::new(config, Some(path.to_path_buf())).with_env())
    }

    /// Load from default locations, falling back to environment-only config
    pub fn load_default() -> LoadReport {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("sure-circle").join("config.toml")),
            Some(PathBuf::from("./sure-circle.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths).with_env()
    }

    /// First candidate that exists and parses. Broken files are skipped and
    /// kept in the report. Overrides are not applied.
    pub fn load_first(paths: &[PathBuf]) -> LoadReport {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    let mut report = LoadReport::new(config, Some(path.clone()));
                    report.warnings = skipped;
                    return report;
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut report = LoadReport::new(Config::default(), None);
        report.warnings = skipped;
        report
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> LoadReport {
        LoadReport::new(Config::default(), None).with_env()
    }

    /// Apply overrides from any variable lookup. Returns the overrides that
    /// were ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(host) = lookup("SURE_CIRCLE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SURE_CIRCLE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(ConfigError::InvalidOverride {
                    key: "SURE_CIRCLE_PORT",
                    value: port,
                }),
            }
        }
        if let Some(dist) = lookup("SURE_CIRCLE_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist);
        }
        if let Some(level) = lookup("SURE_CIRCLE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SURE_CIRCLE_LOG_FORMAT") {
            self.logging.format = format;
        }

        ignored
    }
}

/// Loaded configuration plus what happened while loading it.
///
/// Loading runs before the log subscriber exists, so nothing is logged
/// here; call [`LoadReport::log`] once tracing is set up.
#[derive(Debug)]
pub struct LoadReport {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Skipped config files and ignored overrides
    pub warnings: Vec<ConfigError>,
}

impl LoadReport {
    fn new(config: Config, source: Option<PathBuf>) -> Self {
        Self {
            config,
            source,
            warnings: Vec::new(),
        }
    }

    fn with_env(mut self) -> Self {
        let ignored = self
            .config
            .apply_overrides(|key| std::env::var(key).ok());
        self.warnings.extend(ignored);
        self
    }

    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring invalid {key}: {value}")]
    InvalidOverride { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sure Circle Configuration
#
# Environment variables override these settings:
# - SURE_CIRCLE_HOST
# - SURE_CIRCLE_PORT
# - SURE_CIRCLE_DIST_DIR
# - SURE_CIRCLE_LOG_LEVEL
# - SURE_CIRCLE_LOG_FORMAT

[server]
# Interface to bind
host = "127.0.0.1"

# Port to serve the UI on
port = 8084

# Compiled UI directory (output of `trunk build` in sure-circle-ui)
dist_dir = "sure-circle-ui/dist"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.server.dist_dir, PathBuf::from("sure-circle-ui/dist"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/sure-circle.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        match Config::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SURE_CIRCLE_PORT", "9100"),
            ("SURE_CIRCLE_DIST_DIR", "/srv/ui"),
            ("SURE_CIRCLE_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let ignored = config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert!(ignored.is_empty());
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/ui"));
        assert_eq!(
            config.logging.filter_directive(),
            "sure_circle=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        let ignored =
            config.apply_overrides(|k| (k == "SURE_CIRCLE_PORT").then(|| "eighty".to_string()));

        assert_eq!(config.server.port, 8084);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].to_string(), "Ignoring invalid SURE_CIRCLE_PORT: eighty");
    }

    #[test]
    fn test_broken_candidate_is_reported_not_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\nport = 9300\n").unwrap();

        let report = Config::load_first(&[
            dir.path().join("missing.toml"),
            broken.clone(),
            good.clone(),
        ]);

        assert_eq!(report.config.server.port, 9300);
        assert_eq!(report.source, Some(good));
        assert_eq!(report.warnings.len(), 1);
        match &report.warnings[0] {
            ConfigError::Parse { path, .. } => assert_eq!(path, &broken),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_usable_candidate_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("sure-circle.toml");
        std::fs::write(&broken, "port = \"eighty\"\n[").unwrap();

        let report = Config::load_first(&[broken]);

        assert!(report.source.is_none());
        assert_eq!(report.config.server.port, 8084);
        assert_eq!(report.warnings.len(), 1);
    }
}
