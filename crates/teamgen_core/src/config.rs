//! API settings: key guard, rate limiting, CORS origins for the host.
//!
//! Settings load from a JSON file whose path comes from the
//! `TEAMGEN_CONFIG_PATH` environment variable; with the variable unset the
//! defaults apply.

use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const CONFIG_PATH_ENV: &str = "TEAMGEN_CONFIG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Bearer token required for destructive endpoints. Empty disables the check.
    pub api_key: String,
    /// Requests allowed per caller per window. 0 disables rate limiting.
    pub rate_limit_requests: u32,
    pub rate_limit_window_secs: u64,
    /// Origins the embedding transport should allow; the engine only carries
    /// them through.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            rate_limit_requests: 100,
            rate_limit_window_secs: 3600,
            allowed_origins: Vec::new(),
        }
    }
}

impl ApiSettings {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Persistence(format!("failed to read settings file {path}: {e}"))
        })?;
        let settings: ApiSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Resolve settings from `TEAMGEN_CONFIG_PATH`, falling back to defaults
    /// when unset or blank.
    pub fn load_from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}
