//! ThingsBoard connection configuration
//!
//! Loaded from environment variables; the binary also picks up a local
//! `.env` file via dotenvy before reading them.

use std::env;

use crate::{Error, Result};

/// Connection settings for a ThingsBoard instance.
#[derive(Debug, Clone)]
pub struct TbConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl TbConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("TB_URL").map_err(|_| Error::InvalidArgument("TB_URL not set".to_string()))?;
        let username = env::var("TB_USERNAME")
            .map_err(|_| Error::InvalidArgument("TB_USERNAME not set".to_string()))?;
        let password = env::var("TB_PASSWORD")
            .map_err(|_| Error::InvalidArgument("TB_PASSWORD not set".to_string()))?;

        Ok(Self {
            // Request paths are joined with a leading slash
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        })
    }
}
