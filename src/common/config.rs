use std::env;
use url::Url;
use crate::client::models::generation::Mode;

pub const DEFAULT_SERVER_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and port of the generation service, without a trailing slash.
    pub server_origin: String,
    pub default_mode: Mode,
    /// env_logger filter, e.g. `info` or `uml_generator=debug`.
    pub log_level: String,
    /// Problems found while reading the variables, logged by `init_logging`.
    pub warnings: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_origin: DEFAULT_SERVER_ORIGIN.to_string(),
            default_mode: Mode::default(),
            log_level: "info".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Invalid values fall
    /// back to the defaults and leave an entry in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let server_origin = match lookup("UML_SERVER_ORIGIN") {
            Some(raw) => normalize_origin(&raw).unwrap_or_else(|| {
                warnings.push(format!(
                    "Ignoring invalid UML_SERVER_ORIGIN '{}', using {}",
                    raw, DEFAULT_SERVER_ORIGIN
                ));
                defaults.server_origin.clone()
            }),
            None => defaults.server_origin.clone(),
        };

        let default_mode = match lookup("UML_DEFAULT_MODE") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!("Ignoring UML_DEFAULT_MODE: {}", e));
                defaults.default_mode
            }),
            None => defaults.default_mode,
        };

        // LOG_LEVEL takes the place of RUST_LOG; RUST_LOG alone still works.
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or(defaults.log_level);

        Self { server_origin, default_mode, log_level, warnings }
    }

    /// `/generate` on the configured origin.
    pub fn generate_endpoint(&self) -> String {
        format!("{}/generate", self.server_origin)
    }

    /// Starts `env_logger` with `log_level` as the filter, then reports the
    /// configuration warnings collected before a logger existed.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .try_init();
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }
}

/// Accepts absolute http(s) URLs and returns them without trailing slashes.
pub fn normalize_origin(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}
