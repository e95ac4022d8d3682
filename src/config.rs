//! Configuration loading and constants.
//!
//! Configuration is assembled once at startup: listener settings come from the
//! command line, the application name and logging format come from the process
//! environment. Handlers never read the environment themselves; they only see
//! the resolved, immutable `AppConfig`.

use const_format::formatcp;
use std::net::SocketAddr;

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the application name served on the root path.
pub const APP_NAME_ENV: &str = "APP_NAME";

/// Environment variable selecting the log output format ("text" or "json").
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Fallback response body when no application name is configured.
pub const DEFAULT_APP_NAME: &str = "no app name";

/// Default listener host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listener port.
pub const DEFAULT_PORT: u16 = 5000;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=debug,tower_http=debug", PKG_NAME);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log format value selecting structured JSON output.
pub const JSON_LOG_FORMAT: &str = "json";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Cache-Control value for the root path. The body is process configuration,
/// not content; intermediaries must not serve it past a restart.
pub const CACHE_CONTROL_ROOT: &str = "no-store";

// =============================================================================
// Shutdown
// =============================================================================

/// Seconds to wait for in-flight connections to drain during shutdown.
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Resolved application name, always non-empty
    pub app_name: String,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl HttpServerConfig {
    /// Resolve the configured host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e| ConfigError::ListenAddr(addr, e))
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    /// Whether structured JSON output was selected. Any value other than
    /// "json" falls back to text output.
    pub fn is_json(&self) -> bool {
        self.format == JSON_LOG_FORMAT
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

/// Resolve the raw `APP_NAME` value into the response body.
///
/// An empty string is treated the same as an unset variable: both yield the
/// fallback name. The returned value is therefore always non-empty.
fn resolve_app_name(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_APP_NAME.to_string(),
    }
}

impl AppConfig {
    /// Build the configuration from CLI-provided listener settings and the
    /// process environment.
    ///
    /// Format selection priority: CLI flag > `LOG_FORMAT` > default.
    pub fn from_env(
        host: String,
        port: u16,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let app_name = match std::env::var(APP_NAME_ENV) {
            Ok(value) => resolve_app_name(Some(value)),
            Err(std::env::VarError::NotPresent) => resolve_app_name(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(APP_NAME_ENV));
            }
        };

        let format = log_format
            .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string());

        Ok(Self {
            http: HttpServerConfig { host, port },
            app_name,
            logging: LoggingConfig { format },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} contains invalid Unicode")]
    NotUnicode(&'static str),
    #[error("Invalid listen address '{0}': {1}")]
    ListenAddr(String, std::net::AddrParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_passes_through_non_empty_values() {
        assert_eq!(
            resolve_app_name(Some("My Service".to_string())),
            "My Service"
        );
    }

    #[test]
    fn app_name_falls_back_when_unset() {
        assert_eq!(resolve_app_name(None), DEFAULT_APP_NAME);
    }

    #[test]
    fn app_name_treats_empty_as_unset() {
        assert_eq!(resolve_app_name(Some(String::new())), DEFAULT_APP_NAME);
    }

    #[test]
    fn socket_addr_parses_defaults() {
        let http = HttpServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        };
        assert_eq!(http.socket_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let http = HttpServerConfig {
            host: "not a host".to_string(),
            port: DEFAULT_PORT,
        };
        assert!(matches!(
            http.socket_addr(),
            Err(ConfigError::ListenAddr(_, _))
        ));
    }

    #[test]
    fn json_format_is_detected() {
        let logging = LoggingConfig {
            format: JSON_LOG_FORMAT.to_string(),
        };
        assert!(logging.is_json());
        assert!(!LoggingConfig::default().is_json());
    }
}
