//! Application configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled. Parsing goes through
//! [`AppConfig::from_lookup`] so it can be tested without the build env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_APP_TITLE: &str = "Student Portal";
pub const DEFAULT_SESSION_KEY: &str = "student_portal_session";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is set but blank")]
    EmptyValue { var: &'static str },
    #[error("{var} has unknown log level {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Document title shown in the browser tab.
    pub app_title: String,
    /// `localStorage` key holding the session snapshot.
    pub session_storage_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_owned(),
            session_storage_key: DEFAULT_SESSION_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `PORTAL_APP_TITLE`: default "Student Portal"
    /// - `PORTAL_SESSION_KEY`: default `student_portal_session`
    /// - `PORTAL_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                "PORTAL_APP_TITLE" => option_env!("PORTAL_APP_TITLE"),
                "PORTAL_SESSION_KEY" => option_env!("PORTAL_SESSION_KEY"),
                "PORTAL_LOG_LEVEL" => option_env!("PORTAL_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_title = non_blank(&lookup, "PORTAL_APP_TITLE")?.unwrap_or_else(|| DEFAULT_APP_TITLE.to_owned());
        let session_storage_key =
            non_blank(&lookup, "PORTAL_SESSION_KEY")?.unwrap_or_else(|| DEFAULT_SESSION_KEY.to_owned());
        let log_level = parse_log_level("PORTAL_LOG_LEVEL", non_blank(&lookup, "PORTAL_LOG_LEVEL")?.as_deref())?;

        Ok(Self { app_title, session_storage_key, log_level })
    }
}

fn non_blank<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyValue { var });
            }
            Ok(Some(trimmed.to_owned()))
        }
    }
}

fn parse_log_level(var: &'static str, raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => {
            log::Level::from_str(value).map_err(|_| ConfigError::InvalidLogLevel { var, value: value.to_owned() })
        }
    }
}
