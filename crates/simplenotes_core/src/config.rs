//! Application-shell runtime configuration.
//!
//! # Responsibility
//! - Read the public runtime config once at startup from the environment.
//! - Expose it to outer integrations; the notes store itself consumes none
//!   of it except `log_level` feeding the logging bootstrap.
//!
//! # Invariants
//! - Unset variables degrade to empty strings / false / `None`, never to
//!   errors.

use crate::logging::default_log_level;
use std::env;

/// Public runtime configuration mirrored from the original app shell.
///
/// Every field is a placeholder for integrations outside this core, kept so
/// embedders see the same knobs the web shell exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base: String,
    pub backend_url: String,
    pub frontend_url: String,
    pub ws_url: String,
    pub environment: String,
    pub telemetry_disabled: bool,
    pub enable_source_maps: bool,
    pub port: Option<u16>,
    pub trust_proxy: bool,
    pub log_level: String,
    pub healthcheck_path: String,
    pub feature_flags: String,
    pub experiments_enabled: bool,
}

impl RuntimeConfig {
    /// Reads configuration from `SIMPLE_NOTES_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base: env_string("SIMPLE_NOTES_API_BASE"),
            backend_url: env_string("SIMPLE_NOTES_BACKEND_URL"),
            frontend_url: env_string("SIMPLE_NOTES_FRONTEND_URL"),
            ws_url: env_string("SIMPLE_NOTES_WS_URL"),
            environment: env_string("SIMPLE_NOTES_ENV"),
            telemetry_disabled: env_flag("SIMPLE_NOTES_TELEMETRY_DISABLED"),
            enable_source_maps: env_flag("SIMPLE_NOTES_ENABLE_SOURCE_MAPS"),
            port: env_port("SIMPLE_NOTES_PORT"),
            trust_proxy: env_flag("SIMPLE_NOTES_TRUST_PROXY"),
            log_level: env_string("SIMPLE_NOTES_LOG_LEVEL"),
            healthcheck_path: env_string("SIMPLE_NOTES_HEALTHCHECK_PATH"),
            feature_flags: env_string("SIMPLE_NOTES_FEATURE_FLAGS"),
            experiments_enabled: env_flag("SIMPLE_NOTES_EXPERIMENTS_ENABLED"),
        }
    }

    /// Configured log level, falling back to the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        if self.log_level.trim().is_empty() {
            default_log_level()
        } else {
            self.log_level.trim()
        }
    }
}

fn env_string(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

fn env_flag(name: &str) -> bool {
    matches!(
        env::var(name)
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn env_port(name: &str) -> Option<u16> {
    env::var(name).ok()?.trim().parse().ok()
}
