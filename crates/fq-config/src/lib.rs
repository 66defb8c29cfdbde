//! # fq-config
//!
//! Layered configuration loading for factquiz using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FQ_*` prefix, `__` as separator)
//! 2. Project-level `.factquiz/config.toml`
//! 3. User-level `~/.config/factquiz/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FQ_API__BASE_URL` -> `api.base_url`,
//! `FQ_POLICY__CORRECT_CHOICE` -> `policy.correct_choice`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fq_config::FqConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = FqConfig::load().expect("config");
//! println!("backend: {}", config.api.endpoint_root());
//! ```

mod api;
mod error;
mod policy;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use policy::PolicyConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".factquiz/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FqConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl FqConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are the caller's concern; load them before this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the resulting
    /// `[api]` section is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FQ_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("factquiz").join("config.toml"))
    }
}
