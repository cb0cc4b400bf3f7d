//! CLI command implementations
//!
//! `serve` is the only long-running command. `validate` and `digest` are
//! one-shot and never touch a store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::schema::{digest as content_digest, validate_plan, VALID_MESSAGE};
use crate::store::{DocumentStore, StoreConfig, DEFAULT_KEY_PREFIX};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_line};

/// Configuration file structure
///
/// ```json
/// {
///   "host": "0.0.0.0",
///   "port": 54321,
///   "cors_origins": [],
///   "key_prefix": "json_schema:",
///   "store": {"backend": "local", "data_dir": "./data"}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bind address and CORS
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Prefix prepended to every object id to form the store key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Key-value backend (default: memory)
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            key_prefix: default_key_prefix(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.key_prefix.is_empty() {
            return Err(CliError::config_error("key_prefix must not be empty"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if let StoreConfig::Local { data_dir } = &self.store {
            if data_dir.as_os_str().is_empty() {
                return Err(CliError::config_error(
                    "store.data_dir is required for the local backend",
                ));
            }
        }

        Ok(())
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Validate { file } => validate(&file),
        Command::Digest { file } => digest(&file),
    }
}

/// Start the HTTP server.
///
/// Defaults apply when no config file is given; `port` overrides the
/// configured port.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(port) = port {
        config.server.port = port;
    }

    let port_str = config.server.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", config.server.host.as_str()),
            ("port", port_str.as_str()),
            ("key_prefix", config.key_prefix.as_str()),
        ],
    );

    let backend = config.store.open().map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::BootFailed, &[("reason", reason.as_str())]);
        CliError::from(e)
    })?;
    log_event_with_fields(Event::StoreOpened, &[("backend", config.store.name())]);

    let store = DocumentStore::with_prefix(backend, config.key_prefix.clone());
    let server = HttpServer::new(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a document file, printing the outcome.
///
/// An invalid document is reported both on stdout and as an error so the
/// process exits non-zero.
pub fn validate(file: &Path) -> CliResult<()> {
    let document = read_document(file)?;

    match validate_plan(&document) {
        Ok(()) => write_line(VALID_MESSAGE),
        Err(e) => {
            let message = e.to_string();
            write_line(&message)?;
            Err(CliError::invalid_document(message))
        }
    }
}

/// Print the content digest of a document file
pub fn digest(file: &Path) -> CliResult<()> {
    let document = read_document(file)?;
    write_line(&content_digest(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 54321);
        assert_eq!(config.key_prefix, "json_schema:");
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "planstore.json",
            r#"{
                "host": "127.0.0.1",
                "port": 8080,
                "key_prefix": "document:",
                "store": {"backend": "local", "data_dir": "/var/lib/planstore"}
            }"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:8080");
        assert_eq!(config.key_prefix, "document:");
        assert_eq!(
            config.store,
            StoreConfig::Local {
                data_dir: PathBuf::from("/var/lib/planstore")
            }
        );
    }

    #[test]
    fn test_load_empty_object_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "planstore.json", "{}");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_rejects_empty_prefix() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "planstore.json", r#"{"key_prefix": ""}"#);
        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_rejects_bad_json_and_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "planstore.json", "{port: 1}");
        assert!(Config::load(&path).unwrap_err().message().contains("Invalid config JSON"));

        let missing = temp.path().join("absent.json");
        assert!(Config::load(&missing).unwrap_err().message().contains("Failed to read config"));
    }

    #[test]
    fn test_validate_command() {
        let temp = TempDir::new().unwrap();
        let good = write_file(&temp, "good.json", r#"{"objectId": "a", "planCostShares": {"copay": 1}}"#);
        assert!(validate(&good).is_ok());

        let bad = write_file(&temp, "bad.json", r#"{"objectId": "a"}"#);
        let err = validate(&bad).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidDocument);
        assert_eq!(err.message(), "Invalid schema. 'planCostShares' should be a dictionary.");
    }

    #[test]
    fn test_digest_command() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "plan.json", r#"{"planCostShares": {}}"#);
        assert!(digest(&path).is_ok());
    }
}
