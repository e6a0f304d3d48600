use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

use crate::errors::AppError;

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
const API_KEY_VAR: &str = "API_KEY";

/// Process-wide configuration. Loaded once at startup, immutable afterwards,
/// and handed by reference to the components that need it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Provider base URL, up to and including the city query parameter.
    pub api: String,
    /// Name of the query parameter that carries the API key.
    pub api_key_param: String,
    pub server_port: u16,
    /// Supplied via the environment, never by the configuration file.
    #[serde(skip)]
    pub api_key: String,
}

/// Loads the file selected by `ENVIRONMENT` and the API key from `API_KEY`.
/// Any failure here is fatal to startup.
pub fn load() -> Result<ServerConfig, AppError> {
    let environment = env::var(ENVIRONMENT_VAR).unwrap_or_default();
    let path = config_file_for(&environment)?;

    info!(path, "loading configuration");
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read '{path}': {e}")))?;
    let mut config = parse(&raw)?;

    let api_key = env::var(API_KEY_VAR).unwrap_or_default();
    if api_key.is_empty() {
        return Err(AppError::Config(format!("{API_KEY_VAR} is not set")));
    }
    config.api_key = api_key;

    Ok(config)
}

fn config_file_for(environment: &str) -> Result<&'static str, AppError> {
    match environment {
        "dev" => Ok("config/config.dev.json"),
        "test" => Ok("config/config.test.json"),
        "prod" => Ok("config/config.prod.json"),
        other => Err(AppError::Config(format!("unknown environment '{other}'"))),
    }
}

fn parse(raw: &str) -> Result<ServerConfig, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Config(format!("malformed configuration: {e}")))
}
