//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::str::FromStr;

use cliffhanger_story::domain::config::StoryConfig;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// Fixed seed for reproducible stories (`CLIFFHANGER_RNG_SEED`).
    pub rng_seed: Option<u64>,
    /// Story pacing; `max_beats` comes from `CLIFFHANGER_MAX_BEATS`.
    pub story: StoryConfig,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(3000);
        let rng_seed = parse_var(&lookup, "CLIFFHANGER_RNG_SEED")?;

        let mut story = StoryConfig::default();
        if let Some(max_beats) = parse_var::<usize>(&lookup, "CLIFFHANGER_MAX_BEATS")? {
            if max_beats == 0 {
                return Err(AppError::Config(
                    "CLIFFHANGER_MAX_BEATS must be at least 1".to_string(),
                ));
            }
            story.max_beats = max_beats;
        }

        Ok(Self {
            host,
            port,
            rng_seed,
            story,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} is invalid: {e}")))
        })
        .transpose()
}
