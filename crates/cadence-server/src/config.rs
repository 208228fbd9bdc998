use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use cadence_domain::shared::DomainError;

const DEFAULT_BIND: &str = "127.0.0.1:8420";
const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// AI endpoint settings. Absent when no API key is configured; the
/// recommendation requester then degrades instead of blocking startup.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub ai: Option<AiConfig>,
    pub reminders_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        // Absent .env file is fine; env vars alone work too.
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("CADENCE_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .map_err(|e| DomainError::Validation(format!("Invalid CADENCE_BIND: {}", e)))?;

        let data_dir = match std::env::var("CADENCE_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cadence"),
        };

        let database_path = std::env::var("CADENCE_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("cadence.db"));

        let log_dir = std::env::var("CADENCE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("logs"));

        let ai = match std::env::var("CADENCE_AI_API_KEY") {
            Ok(api_key) if !api_key.trim().is_empty() => {
                let timeout_secs = std::env::var("CADENCE_AI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_AI_TIMEOUT_SECS);

                Some(AiConfig {
                    base_url: std::env::var("CADENCE_AI_BASE_URL")
                        .unwrap_or_else(|_| DEFAULT_AI_BASE_URL.to_string()),
                    api_key: api_key.trim().to_string(),
                    model: std::env::var("CADENCE_AI_MODEL")
                        .unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            _ => None,
        };

        let reminders_enabled = std::env::var("CADENCE_REMINDERS")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            database_path,
            log_dir,
            ai,
            reminders_enabled,
        })
    }
}
