use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub site_url: String,
    pub token: String,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env` file
    /// first if one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        Ok(Self {
            site_url: env::var("HALO_SITE_URL").context("HALO_SITE_URL must be set")?,
            token: env::var("HALO_TOKEN").context("HALO_TOKEN must be set")?,
        })
    }
}
