use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_SECRET_FILE: &str = "/run/secrets/openai_api_key";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 25;

/// Application configuration loaded from environment variables.
///
/// The model credential is optional: without it the service still starts,
/// but tag generation reports a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secret_file = std::env::var("OPENAI_API_KEY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRET_FILE));
        let sources: [&dyn CredentialSource; 2] = [
            &SecretFile::new(secret_file),
            &EnvVar::new("OPENAI_API_KEY"),
        ];

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            openai_api_key: resolve_credential(&sources),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            fetch_timeout_secs: match std::env::var("FETCH_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
            },
        })
    }

    /// Whether a model credential was found at startup.
    pub fn credential_available(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// A place a credential may be looked up from.
pub trait CredentialSource {
    fn name(&self) -> &str;
    fn lookup(&self) -> Option<String>;
}

/// A mounted secret file (Docker/Kubernetes secrets). Only the first line is used.
pub struct SecretFile {
    path: PathBuf,
    name: String,
}

impl SecretFile {
    pub fn new(path: PathBuf) -> Self {
        let name = format!("secret file {}", path.display());
        Self { path, name }
    }
}

impl CredentialSource for SecretFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        contents.lines().next().map(str::to_string)
    }
}

pub struct EnvVar {
    key: &'static str,
}

impl EnvVar {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl CredentialSource for EnvVar {
    fn name(&self) -> &str {
        self.key
    }

    fn lookup(&self) -> Option<String> {
        std::env::var(self.key).ok()
    }
}

/// Returns the first non-blank credential, trying `sources` in order.
pub fn resolve_credential(sources: &[&dyn CredentialSource]) -> Option<String> {
    for source in sources {
        match source.lookup() {
            Some(value) if !value.trim().is_empty() => {
                debug!("Credential resolved from {}", source.name());
                return Some(value.trim().to_string());
            }
            _ => debug!("No credential in {}", source.name()),
        }
    }
    None
}
