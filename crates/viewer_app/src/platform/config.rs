use anyhow::{bail, Context};
use url::Url;

use super::logging::LogDestination;

/// Environment prefix shared by all viewer settings.
const ENV_PREFIX: &str = "VIEWER_";

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the archive service.
    pub api_base: Url,
    /// Location path to resolve on startup.
    pub start_path: String,
    pub log_destination: LogDestination,
}

impl AppConfig {
    /// Reads `VIEWER_*` environment variables and the optional start-path
    /// argument.
    pub fn load() -> anyhow::Result<Self> {
        let base_raw = env_or("API_BASE", DEFAULT_API_BASE);
        let api_base = Url::parse(&base_raw)
            .with_context(|| format!("invalid API base url {base_raw:?}"))?;

        let log_destination = parse_log_destination(&env_or("LOG", "file"))?;
        let start_path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

        Ok(Self {
            api_base,
            start_path,
            log_destination,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(format!("{ENV_PREFIX}{name}")).unwrap_or_else(|_| default.to_string())
}

fn parse_log_destination(value: &str) -> anyhow::Result<LogDestination> {
    match value {
        "file" => Ok(LogDestination::File),
        "terminal" => Ok(LogDestination::Terminal),
        "both" => Ok(LogDestination::Both),
        other => bail!("invalid {ENV_PREFIX}LOG value {other:?} (file, terminal, both)"),
    }
}
