//! Bootstrap configuration loading
//!
//! Settings come from, highest priority first:
//! 1. Command-line arguments / environment (applied by the binary)
//! 2. TOML config file
//! 3. Built-in defaults
//!
//! The TOML file is read once at startup; the service must restart to pick
//! up changes.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Deployment environment, selects the default log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl Environment {
    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }
}

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub env: Environment,

    /// Path to SQLite database file (relative or absolute)
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub lyrics_api: LyricsApiConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); defaults by `env`
    #[serde(default)]
    pub level: Option<String>,

    /// Log file path (optional, logs to stdout only if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// External song info lookup service
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsApiConfig {
    /// Lookup service root; unset means this service's own `/info`
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_lyrics_timeout_secs")]
    pub timeout_secs: u64,

    /// Serve a canned `/info` endpoint from this service
    #[serde(default = "default_serve_stub")]
    pub serve_stub: bool,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("songlib.db")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_lyrics_timeout_secs() -> u64 {
    10
}

fn default_serve_stub() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LyricsApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_lyrics_timeout_secs(),
            serve_stub: default_serve_stub(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            database_path: default_database_path(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            lyrics_api: LyricsApiConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Effective log level: explicit setting, else the environment default
    pub fn log_level(&self) -> &str {
        self.logging
            .level
            .as_deref()
            .unwrap_or_else(|| self.env.default_log_level())
    }

    /// `host:port` for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Effective lookup service root
    ///
    /// Falls back to this server's own listener, so call it after any
    /// command line overrides of host or port. A wildcard listen host is
    /// reached through loopback.
    pub fn lyrics_base_url(&self) -> String {
        if let Some(url) = self.lyrics_api.base_url.as_deref().filter(|u| !u.is_empty()) {
            return url.to_string();
        }
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "" => "127.0.0.1",
            "::" | "[::]" => "[::1]",
            host => host,
        };
        format!("http://{}:{}", host, self.server.port)
    }
}

/// Resolve the config file location
///
/// Uses the explicit path when given (command line or `SONGLIB_CONFIG`),
/// then `<config dir>/songlib/config.toml` if it exists, then
/// `config.toml` in the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(user_config) = dirs::config_dir().map(|d| d.join("songlib").join("config.toml")) {
        if user_config.exists() {
            return user_config;
        }
    }

    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.env, Environment::Local);
        assert_eq!(config.database_path, PathBuf::from("songlib.db"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.lyrics_api.timeout_secs, 10);
        assert!(config.lyrics_api.serve_stub);
        assert!(config.logging.file.is_none());
        assert_eq!(config.lyrics_base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_lookup_url_follows_server_port() {
        let mut config = TomlConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.lyrics_base_url(), "http://127.0.0.1:9000");

        // Command line override applied after loading
        config.server.port = 9100;
        assert_eq!(config.lyrics_base_url(), "http://127.0.0.1:9100");
    }

    #[test]
    fn test_lookup_url_for_wildcard_host() {
        let config =
            TomlConfig::from_toml_str("[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();
        assert_eq!(config.lyrics_base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            env = "prod"
            database_path = "/var/lib/songlib/songs.db"

            [server]
            host = "0.0.0.0"
            port = 9000

            [logging]
            file = "/var/log/songlib.log"

            [lyrics_api]
            base_url = "http://lyrics.internal:8081"
            timeout_secs = 3
            serve_stub = false
            "#,
        )
        .unwrap();

        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log_level(), "info");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/var/log/songlib.log"))
        );
        assert_eq!(config.lyrics_base_url(), "http://lyrics.internal:8081");
        assert!(!config.lyrics_api.serve_stub);
    }

    #[test]
    fn test_explicit_log_level_wins() {
        let config = TomlConfig::from_toml_str(
            r#"
            env = "prod"
            [logging]
            level = "trace"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level(), "trace");
    }

    #[test]
    fn test_unknown_env_rejected() {
        let result = TomlConfig::from_toml_str(r#"env = "staging""#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_config_path() {
        let path = resolve_config_path(Some(Path::new("/etc/songlib.toml")));
        assert_eq!(path, PathBuf::from("/etc/songlib.toml"));
    }
}
