use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Await `AuthService::login` before leaving the login screen
    pub verify_login: bool,
    pub log_file: PathBuf,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verify_login: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

const DEFAULT_LOG_FILE: &str = "authlist.log";
const DEFAULT_TICK_MS: u64 = 100;
const MIN_TICK_MS: u64 = 16;
const MAX_TICK_MS: u64 = 1000;

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    ///
    /// Unset or unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verify_login = lookup("AUTHLIST_VERIFY_LOGIN")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(false);

        let log_file = lookup("AUTHLIST_LOG_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let requested_tick = lookup("AUTHLIST_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS);

        let tick_ms = requested_tick.clamp(MIN_TICK_MS, MAX_TICK_MS);
        if tick_ms != requested_tick {
            tracing::warn!(
                "AUTHLIST_TICK_MS is set to {}, outside the supported range {}..={}. Using {} ms.",
                requested_tick,
                MIN_TICK_MS,
                MAX_TICK_MS,
                tick_ms
            );
        }

        Ok(Self {
            verify_login,
            log_file,
            tick_ms,
        })
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
